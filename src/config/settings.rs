//! Application settings and paths.
//!
//! Manages XDG-compliant paths for the settings file and the settings that
//! tune classification.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Hosts that serve git repositories at `host/owner/repo`.
pub const DEFAULT_REPOSITORY_HOSTS: &[&str] = &[
    "github.com",
    "www.github.com",
    "gitlab.com",
    "www.gitlab.com",
    "bitbucket.org",
    "www.bitbucket.org",
    "codeberg.org",
];

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/targetscope)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> ConfigResult<&'static Paths> {
        if let Some(paths) = PATHS.get() {
            return Ok(paths);
        }
        let paths = Self::new()?;
        Ok(PATHS.get_or_init(|| paths))
    }

    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "targetscope", "targetscope")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Hosts whose `host/owner/repo` paths are treated as repositories.
    pub repository_hosts: Vec<String>,
    /// Expand a leading `~` in local paths to the home directory.
    pub expand_home: bool,
    /// Default output format for the CLI.
    pub default_output_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            repository_hosts: DEFAULT_REPOSITORY_HOSTS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            expand_home: true,
            default_output_format: "plain".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults
    /// when no settings file exists.
    pub fn load() -> ConfigResult<Self> {
        let file = match Paths::get() {
            Ok(paths) => paths.settings_file(),
            Err(e) => {
                tracing::warn!(error = %e, "using default settings");
                return Ok(Self::default());
            }
        };

        if !file.exists() {
            tracing::debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self = serde_json::from_str(&content)?;
        let settings = settings.normalized();
        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::get()?;
        fs::create_dir_all(&paths.config_dir).map_err(|e| ConfigError::WriteFailed {
            path: paths.config_dir.clone(),
            reason: e.to_string(),
        })?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Validate the settings.
    pub fn validate(&self) -> ConfigResult<()> {
        for host in &self.repository_hosts {
            if host.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "repository host cannot be empty".to_string(),
                ));
            }
            if host.contains("://") || host.contains('/') {
                return Err(ConfigError::InvalidValue(format!(
                    "repository host '{}' must be a bare hostname",
                    host
                )));
            }
        }

        if !["plain", "json", "csv"].contains(&self.default_output_format.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "invalid output format: {}",
                self.default_output_format
            )));
        }

        Ok(())
    }

    /// Lowercase and trim repository hosts, dropping duplicates.
    fn normalized(mut self) -> Self {
        let mut hosts: Vec<String> = Vec::with_capacity(self.repository_hosts.len());
        for host in self.repository_hosts {
            let host = host.trim().to_ascii_lowercase();
            if !hosts.contains(&host) {
                hosts.push(host);
            }
        }
        self.repository_hosts = hosts;
        self.default_output_format = self.default_output_format.to_ascii_lowercase();
        self
    }

    /// Whether `host` is a known repository host (ASCII case-insensitive).
    pub fn is_repository_host(&self, host: &str) -> bool {
        self.repository_hosts
            .iter()
            .any(|h| h.eq_ignore_ascii_case(host))
    }
}
