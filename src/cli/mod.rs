//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `targetscope classify <target>...` - Classify targets
//! - `targetscope settings show|path|add-host|remove-host|reset` - Manage settings

mod classify;
mod settings;

pub use classify::ClassifyCommand;
pub use settings::{SettingsAction, SettingsCommand};

use crate::config::AppSettings;
use crate::error::ConfigResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// targetscope - Classify security-assessment targets.
///
/// Recognizes IP addresses, git repositories, web applications, and local
/// source directories, and prints each in a normalized form suitable for
/// handing to a scanner.
#[derive(Parser, Debug)]
#[command(name = "targetscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify and normalize scan targets", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH", env = "TARGETSCOPE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load settings from `--config` if given, otherwise the default location.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        match &self.config {
            Some(path) => AppSettings::load_from(path),
            None => AppSettings::load(),
        }
    }

    /// Settings for the selected command.
    ///
    /// `settings path` and `settings reset` must work with a broken settings
    /// file, so a load failure falls back to defaults for them.
    pub fn effective_settings(&self) -> ConfigResult<AppSettings> {
        match self.load_settings() {
            Ok(settings) => Ok(settings),
            Err(e) if self.command.tolerates_invalid_settings() => {
                tracing::warn!(error = %e, "ignoring unreadable settings");
                Ok(AppSettings::default())
            }
            Err(e) => Err(e),
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one or more targets
    #[command(alias = "c")]
    Classify(ClassifyCommand),

    /// View and manage settings
    #[command(alias = "s")]
    Settings(SettingsCommand),
}

impl Commands {
    fn tolerates_invalid_settings(&self) -> bool {
        match self {
            Self::Classify(_) => false,
            Self::Settings(cmd) => cmd.action.tolerates_invalid_settings(),
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
