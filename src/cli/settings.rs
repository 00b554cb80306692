//! Settings subcommand implementation.
//!
//! Handles the `targetscope settings` command for viewing and editing the
//! settings file.

use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// View and manage settings.
#[derive(Parser, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Settings management actions.
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the effective settings as JSON
    Show,

    /// Print the settings file path
    Path,

    /// Add a repository host
    AddHost {
        /// Hostname, e.g. git.example.org
        host: String,
    },

    /// Remove a repository host
    RemoveHost {
        /// Hostname to remove
        host: String,
    },

    /// Restore default settings
    Reset,
}

impl SettingsAction {
    /// Whether the action can run when the settings file fails to load.
    pub fn tolerates_invalid_settings(&self) -> bool {
        matches!(self, Self::Path | Self::Reset)
    }
}

impl SettingsCommand {
    /// Execute the settings command.
    ///
    /// `config` is the `--config` override; edits are written there when set.
    pub fn execute(
        &self,
        settings: AppSettings,
        config: Option<&Path>,
        quiet: bool,
    ) -> CliResult<()> {
        match &self.action {
            SettingsAction::Show => {
                let json = serde_json::to_string_pretty(&settings)
                    .map_err(|e| CliError::Other(e.to_string()))?;
                println!("{}", json);
                Ok(())
            }
            SettingsAction::Path => {
                println!("{}", settings_path(config)?.display());
                Ok(())
            }
            SettingsAction::AddHost { host } => {
                let updated = add_host(settings, host)?;
                save(&updated, config)?;
                if !quiet {
                    output::print_info(&format!("added repository host '{}'", host));
                }
                Ok(())
            }
            SettingsAction::RemoveHost { host } => {
                let updated = remove_host(settings, host)?;
                save(&updated, config)?;
                if !quiet {
                    output::print_info(&format!("removed repository host '{}'", host));
                }
                Ok(())
            }
            SettingsAction::Reset => {
                save(&AppSettings::default(), config)?;
                if !quiet {
                    output::print_info("settings reset to defaults");
                }
                Ok(())
            }
        }
    }
}

fn settings_path(config: Option<&Path>) -> CliResult<PathBuf> {
    match config {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::get()?.settings_file()),
    }
}

fn save(settings: &AppSettings, config: Option<&Path>) -> CliResult<()> {
    match config {
        Some(path) => settings.save_to(path)?,
        None => settings.save()?,
    }
    Ok(())
}

fn add_host(mut settings: AppSettings, host: &str) -> CliResult<AppSettings> {
    let host = host.trim().to_ascii_lowercase();
    if settings.is_repository_host(&host) {
        return Err(CliError::Other(format!(
            "'{}' is already a repository host",
            host
        )));
    }
    settings.repository_hosts.push(host);
    settings.validate()?;
    Ok(settings)
}

fn remove_host(mut settings: AppSettings, host: &str) -> CliResult<AppSettings> {
    let before = settings.repository_hosts.len();
    settings
        .repository_hosts
        .retain(|h| !h.eq_ignore_ascii_case(host.trim()));
    if settings.repository_hosts.len() == before {
        return Err(CliError::Other(format!(
            "'{}' is not a repository host",
            host
        )));
    }
    Ok(settings)
}
