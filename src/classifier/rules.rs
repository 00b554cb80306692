//! The ordered classification rules.
//!
//! Each rule pairs a predicate with a normalizer. The first rule whose
//! predicate matches decides the target type; its normalizer produces the
//! canonical value or rejects the input outright.

use super::patterns::{
    has_git_suffix, is_bare_domain, is_ssh_locator, is_valid_hostname, parse_ip, path_segments,
    split_url,
};
use crate::config::AppSettings;
use crate::error::{InvalidTargetError, TargetResult};
use crate::types::{TargetParameters, TargetType};
use directories::BaseDirs;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Decides whether a rule applies to a trimmed, non-empty input.
pub type Predicate = fn(&str, &AppSettings) -> bool;

/// Produces the canonical value for an input its rule matched.
pub type Normalizer = fn(&str, &AppSettings) -> TargetResult<String>;

/// One entry in the classification chain.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// The type assigned when this rule matches.
    pub target_type: TargetType,
    /// Claims inputs for this rule.
    pub predicate: Predicate,
    /// Builds the canonical value once the predicate has matched.
    pub normalizer: Normalizer,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("target_type", &self.target_type)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Whether this rule claims `input`.
    pub fn matches(&self, input: &str, settings: &AppSettings) -> bool {
        (self.predicate)(input, settings)
    }

    /// Normalize `input` into this rule's parameters.
    pub fn apply(&self, input: &str, settings: &AppSettings) -> TargetResult<TargetParameters> {
        let value = (self.normalizer)(input, settings)?;
        Ok(TargetParameters::new(self.target_type, value))
    }
}

/// Classification rules in priority order. First match wins.
pub static RULES: [Rule; 4] = [
    Rule {
        name: "ip-literal",
        target_type: TargetType::IpAddress,
        predicate: is_ip_literal,
        normalizer: normalize_ip,
    },
    Rule {
        name: "repository",
        target_type: TargetType::Repository,
        predicate: is_repository,
        normalizer: normalize_repository,
    },
    Rule {
        name: "local-path",
        target_type: TargetType::LocalCode,
        predicate: is_existing_path,
        normalizer: normalize_local_path,
    },
    Rule {
        name: "web",
        target_type: TargetType::WebApplication,
        predicate: is_web_target,
        normalizer: normalize_web,
    },
];

fn is_ip_literal(input: &str, _: &AppSettings) -> bool {
    parse_ip(input).is_some()
}

fn normalize_ip(input: &str, _: &AppSettings) -> TargetResult<String> {
    parse_ip(input)
        .map(|ip| ip.to_string())
        .ok_or_else(|| InvalidTargetError::Unrecognized(input.to_string()))
}

fn is_repository(input: &str, settings: &AppSettings) -> bool {
    if is_ssh_locator(input) {
        return true;
    }

    if let Some(url) = split_url(input) {
        if url.host.is_empty() {
            return false;
        }
        return match url.scheme.to_ascii_lowercase().as_str() {
            "ssh" | "git" | "git+ssh" => {
                path_segments(url.path) >= 1 || has_git_suffix(url.path)
            }
            "http" | "https" => {
                has_git_suffix(url.path)
                    || (settings.is_repository_host(url.host) && path_segments(url.path) >= 2)
            }
            _ => false,
        };
    }

    // Anything else ending in `.git`: relative or absolute paths, `host/repo.git`.
    is_bare_repository(input, settings) || has_git_suffix(input)
}

/// `host/owner/repo` without a scheme, on a known host or ending in `.git`.
fn is_bare_repository(input: &str, settings: &AppSettings) -> bool {
    let Some((host, path)) = input.split_once('/') else {
        return false;
    };

    if !host.contains('.') || !is_valid_hostname(host) {
        return false;
    }
    if path_segments(path) < 2 || path.chars().any(char::is_whitespace) {
        return false;
    }

    settings.is_repository_host(host) || has_git_suffix(path)
}

fn normalize_repository(input: &str, settings: &AppSettings) -> TargetResult<String> {
    if is_bare_repository(input, settings) {
        Ok(format!("https://{}", input))
    } else {
        Ok(input.to_string())
    }
}

/// Interpret `input` as a filesystem path, expanding a leading `~`.
pub(crate) fn expand_path(input: &str, settings: &AppSettings) -> PathBuf {
    if settings.expand_home {
        let rest = if input == "~" {
            Some("")
        } else {
            input.strip_prefix("~/")
        };
        if let (Some(rest), Some(dirs)) = (rest, BaseDirs::new()) {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(input)
}

fn is_existing_path(input: &str, settings: &AppSettings) -> bool {
    fs::metadata(expand_path(input, settings)).is_ok()
}

fn normalize_local_path(input: &str, settings: &AppSettings) -> TargetResult<String> {
    let path = expand_path(input, settings);
    let unresolvable = |reason: String| InvalidTargetError::UnresolvablePath {
        path: path.clone(),
        reason,
    };

    let metadata = fs::metadata(&path).map_err(|e| unresolvable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(InvalidTargetError::NotADirectory(path.clone()));
    }

    let resolved = fs::canonicalize(&path).map_err(|e| unresolvable(e.to_string()))?;
    resolved
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| unresolvable("path is not valid UTF-8".to_string()))
}

fn is_web_target(input: &str, _: &AppSettings) -> bool {
    match split_url(input) {
        Some(url) => {
            matches!(url.scheme.to_ascii_lowercase().as_str(), "http" | "https")
                && !url.host.is_empty()
        }
        None => is_bare_domain(input),
    }
}

fn normalize_web(input: &str, _: &AppSettings) -> TargetResult<String> {
    if split_url(input).is_some() {
        Ok(input.to_string())
    } else {
        Ok(format!("https://{}", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(target_type: TargetType) -> &'static Rule {
        RULES.iter().find(|r| r.target_type == target_type).unwrap()
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<TargetType> = RULES.iter().map(|r| r.target_type).collect();
        assert_eq!(order, TargetType::ALL.to_vec());
    }

    #[test]
    fn test_ip_rule_canonicalizes() {
        let settings = AppSettings::default();
        let ip = rule(TargetType::IpAddress);
        assert!(ip.matches("[::1]", &settings));
        assert_eq!(
            ip.apply("2001:DB8:0:0:0:0:0:1", &settings).unwrap().value(),
            "2001:db8::1"
        );
        assert!(!ip.matches("10.0.0.0/8", &settings));
    }

    #[test]
    fn test_repository_rule_shapes() {
        let settings = AppSettings::default();
        let repo = rule(TargetType::Repository);

        assert!(repo.matches("git@github.com:example/repo.git", &settings));
        assert!(repo.matches("ssh://git@host.example/owner/repo", &settings));
        assert!(repo.matches("https://git.example.org/team/app.git", &settings));
        assert!(repo.matches("https://github.com/example/repo", &settings));
        assert!(repo.matches("github.com/example/repo", &settings));
        assert!(repo.matches("git.example.org/team/app.git", &settings));

        assert!(!repo.matches("https://github.com", &settings));
        assert!(!repo.matches("https://github.com/example", &settings));
        assert!(!repo.matches("https://example.com/team/app", &settings));
        assert!(!repo.matches("example.com/team/app", &settings));
        assert!(!repo.matches("github.com/example", &settings));
        assert!(!repo.matches("ftp://example.com/repo.git", &settings));
        assert!(!repo.matches("ssh://admin@10.0.0.5:22", &settings));
        assert!(!repo.matches("git://git.example.org/", &settings));
    }

    #[test]
    fn test_repository_rule_git_suffix_fallback() {
        let settings = AppSettings::default();
        let repo = rule(TargetType::Repository);

        for input in [
            "example.com/repo.git",
            "git.example.org/repo.git",
            "/srv/git/project.git",
            "../mirrors/tool.git/",
        ] {
            assert!(repo.matches(input, &settings), "{} should match", input);
            assert_eq!(repo.apply(input, &settings).unwrap().value(), input);
        }

        assert_eq!(
            repo.apply("git.example.org/team/app.git", &settings)
                .unwrap()
                .value(),
            "https://git.example.org/team/app.git"
        );
        assert!(!repo.matches(".git", &settings));
        assert!(!repo.matches("example.com/repo.gitx", &settings));
    }

    #[test]
    fn test_repository_rule_uses_configured_hosts() {
        let settings = AppSettings {
            repository_hosts: vec!["git.corp.internal".to_string()],
            ..AppSettings::default()
        };
        let repo = rule(TargetType::Repository);

        assert!(repo.matches("git.corp.internal/team/service", &settings));
        assert!(!repo.matches("github.com/example/repo", &settings));
        assert_eq!(
            repo.apply("git.corp.internal/team/service", &settings)
                .unwrap()
                .value(),
            "https://git.corp.internal/team/service"
        );
    }

    #[test]
    fn test_web_rule() {
        let settings = AppSettings::default();
        let web = rule(TargetType::WebApplication);

        assert!(web.matches("example.com", &settings));
        assert!(web.matches("http://localhost:3000/login", &settings));
        assert!(web.matches("HTTPS://Example.com", &settings));
        assert!(!web.matches("https://", &settings));
        assert!(!web.matches("ftp://example.com", &settings));
        assert!(!web.matches("not-a-valid-target", &settings));

        assert_eq!(
            web.apply("example.com:8443", &settings).unwrap().value(),
            "https://example.com:8443"
        );
        assert_eq!(
            web.apply("http://example.com", &settings).unwrap().value(),
            "http://example.com"
        );
    }

    #[test]
    fn test_local_path_rule_rejects_files() {
        let settings = AppSettings::default();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();
        let input = file.to_str().unwrap();

        let local = rule(TargetType::LocalCode);
        assert!(local.matches(input, &settings));
        assert!(matches!(
            local.apply(input, &settings),
            Err(InvalidTargetError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_expand_path() {
        let settings = AppSettings::default();
        if let Some(dirs) = BaseDirs::new() {
            assert_eq!(expand_path("~", &settings), dirs.home_dir().to_path_buf());
            assert_eq!(expand_path("~/src", &settings), dirs.home_dir().join("src"));
        }
        assert_eq!(expand_path("~user/src", &settings), PathBuf::from("~user/src"));

        let literal = AppSettings {
            expand_home: false,
            ..AppSettings::default()
        };
        assert_eq!(expand_path("~/src", &literal), PathBuf::from("~/src"));
    }
}
