//! Target kinds and their normalized parameters.
//!
//! Every classified target is one of four kinds, each carrying exactly one
//! normalized value under a well-known key:
//! - `ip_address` → `target_ip`
//! - `repository` → `target_repo`
//! - `web_application` → `target_url`
//! - `local_code` → `target_path`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The kind of a scan target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// A single IPv4 or IPv6 host.
    IpAddress,
    /// A git repository (SSH locator or URL).
    Repository,
    /// A web application reachable over HTTP(S).
    WebApplication,
    /// A directory of source code on the local filesystem.
    LocalCode,
}

impl TargetType {
    /// All target types, in classification priority order.
    pub const ALL: [TargetType; 4] = [
        Self::IpAddress,
        Self::Repository,
        Self::LocalCode,
        Self::WebApplication,
    ];

    /// The snake_case tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IpAddress => "ip_address",
            Self::Repository => "repository",
            Self::WebApplication => "web_application",
            Self::LocalCode => "local_code",
        }
    }

    /// The parameter key this type carries.
    pub fn parameter_key(&self) -> &'static str {
        match self {
            Self::IpAddress => "target_ip",
            Self::Repository => "target_repo",
            Self::WebApplication => "target_url",
            Self::LocalCode => "target_path",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown target type: {}", s))
    }
}

/// The normalized value of a classified target.
///
/// Serializes as a single-key map, e.g. `{"target_ip": "192.168.1.1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetParameters {
    /// Canonical IP address text.
    TargetIp(String),
    /// Canonical repository URL or SSH locator.
    TargetRepo(String),
    /// URL with an explicit scheme.
    TargetUrl(String),
    /// Absolute, symlink-resolved directory path.
    TargetPath(String),
}

impl TargetParameters {
    /// Build the parameters for `target_type` holding `value`.
    pub fn new(target_type: TargetType, value: impl Into<String>) -> Self {
        let value = value.into();
        match target_type {
            TargetType::IpAddress => Self::TargetIp(value),
            TargetType::Repository => Self::TargetRepo(value),
            TargetType::WebApplication => Self::TargetUrl(value),
            TargetType::LocalCode => Self::TargetPath(value),
        }
    }

    /// The target type these parameters belong to.
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::TargetIp(_) => TargetType::IpAddress,
            Self::TargetRepo(_) => TargetType::Repository,
            Self::TargetUrl(_) => TargetType::WebApplication,
            Self::TargetPath(_) => TargetType::LocalCode,
        }
    }

    /// The well-known key, e.g. `target_repo`.
    pub fn key(&self) -> &'static str {
        self.target_type().parameter_key()
    }

    /// The normalized value.
    pub fn value(&self) -> &str {
        match self {
            Self::TargetIp(v) | Self::TargetRepo(v) | Self::TargetUrl(v) | Self::TargetPath(v) => v,
        }
    }

    /// Consume and return the normalized value.
    pub fn into_value(self) -> String {
        match self {
            Self::TargetIp(v) | Self::TargetRepo(v) | Self::TargetUrl(v) | Self::TargetPath(v) => v,
        }
    }

    /// The parameters as a one-entry map.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([(self.key(), self.value().to_string())])
    }
}

impl fmt::Display for TargetParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// A classified target together with the input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    /// The input as given (before trimming).
    pub original: String,
    /// The classified kind.
    #[serde(rename = "type")]
    pub target_type: TargetType,
    /// The normalized parameters.
    pub details: TargetParameters,
}

impl TargetInfo {
    /// Create a new target record.
    pub fn new(original: impl Into<String>, details: TargetParameters) -> Self {
        Self {
            original: original.into(),
            target_type: details.target_type(),
            details,
        }
    }
}

impl fmt::Display for TargetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original == self.details.value() {
            write!(f, "{} [{}]", self.details, self.target_type)
        } else {
            write!(f, "{} -> {} [{}]", self.original, self.details, self.target_type)
        }
    }
}
