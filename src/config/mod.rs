//! Configuration management for targetscope.
//!
//! Provides XDG-compliant settings storage. Settings control which hosts
//! count as repository hosts and how local paths are expanded.

mod settings;

pub use settings::{AppSettings, Paths, DEFAULT_REPOSITORY_HOSTS};
