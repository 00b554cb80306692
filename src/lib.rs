//! # targetscope - Scan Target Classification
//!
//! targetscope takes the free-form target strings users hand to security
//! tooling and decides what they are, so a scan orchestrator can pick the
//! right strategy.
//!
//! ## Target Kinds
//!
//! - **IP address**: `192.168.1.1`, `2001:db8::1` (canonicalized)
//! - **Repository**: `git@github.com:owner/repo.git`, `https://host/owner/repo.git`,
//!   `github.com/owner/repo` (given an `https://` scheme)
//! - **Local code**: an existing directory (resolved to an absolute path)
//! - **Web application**: `https://example.com/app`, `example.com` (given an
//!   `https://` scheme)
//!
//! ## Example Usage
//!
//! ```rust
//! use targetscope::{infer_target_type, TargetType};
//!
//! let (target_type, params) =
//!     infer_target_type(Some("2001:0db8:85a3:0000:0000:8a2e:0370:7334")).unwrap();
//!
//! assert_eq!(target_type, TargetType::IpAddress);
//! assert_eq!(params.key(), "target_ip");
//! assert_eq!(params.value(), "2001:db8:85a3::8a2e:370:7334");
//! ```
//!
//! ## Architecture
//!
//! - [`classifier`] - The ordered rule chain and batch classification
//! - [`types`] - Target types, parameters, and reports
//! - [`config`] - Settings and XDG paths
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities
//! - [`cli`] - Command-line interface

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use classifier::{infer_target_type, parse_target_list, Classifier};
pub use config::AppSettings;
pub use error::{CliError, InvalidTargetError};
pub use types::{ClassificationReport, TargetInfo, TargetParameters, TargetType};
