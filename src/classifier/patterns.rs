//! Lexical helpers for recognizing target shapes.
//!
//! Nothing here touches the filesystem or the network.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

// user@host:path, as used by scp-style git remotes
static SSH_LOCATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+:(?P<path>[\w.~-][\w.~/-]*)$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.-]*)://",
        r"(?P<authority>[^/?#\s]*)(?P<path>[^?#\s]*)\S*$",
    ))
    .unwrap()
});

/// The pieces of a `scheme://authority/path` URL needed for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub host: &'a str,
    pub path: &'a str,
}

/// Split a URL into scheme, host and path.
///
/// Userinfo and port are stripped from the host; bracketed IPv6 hosts keep
/// their brackets. Returns `None` when the input has no `scheme://` prefix.
pub fn split_url(s: &str) -> Option<UrlParts<'_>> {
    let caps = URL_REGEX.captures(s)?;
    let authority = caps.name("authority").map_or("", |m| m.as_str());
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

    let host = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => return None,
        }
    } else {
        host_port.split_once(':').map_or(host_port, |(h, _)| h)
    };

    Some(UrlParts {
        scheme: caps.name("scheme").map_or("", |m| m.as_str()),
        host,
        path: caps.name("path").map_or("", |m| m.as_str()),
    })
}

/// Whether `s` is an scp-style git locator such as `git@github.com:owner/repo.git`.
///
/// The path must either name a namespace (`owner/repo`) or end in `.git`,
/// so `admin@host:22` is not mistaken for a repository.
pub fn is_ssh_locator(s: &str) -> bool {
    SSH_LOCATOR_REGEX
        .captures(s)
        .and_then(|caps| caps.name("path"))
        .map_or(false, |path| {
            let path = path.as_str();
            path.contains('/') || has_git_suffix(path)
        })
}

/// Whether a path ends in `.git`, ignoring trailing slashes.
pub fn has_git_suffix(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    path.len() > ".git".len() && path.ends_with(".git")
}

/// Number of non-empty `/`-separated segments in a path.
pub fn path_segments(path: &str) -> usize {
    path.split('/').filter(|seg| !seg.is_empty()).count()
}

/// Parse an IP literal, accepting a bracketed IPv6 form like `[::1]`.
pub fn parse_ip(s: &str) -> Option<IpAddr> {
    if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return match inner.parse::<IpAddr>() {
            Ok(ip @ IpAddr::V6(_)) => Some(ip),
            _ => None,
        };
    }
    s.parse::<IpAddr>().ok()
}

/// Whether `s` is a bare domain with an optional port, e.g. `example.com`
/// or `app.example.com:8443`.
///
/// Requires at least one dot and a non-numeric final label, so malformed
/// IPs like `999.1.1.1` are rejected.
pub fn is_bare_domain(s: &str) -> bool {
    let host = match s.rsplit_once(':') {
        Some((host, port)) => match port.parse::<u16>() {
            Ok(p) if p > 0 => host,
            _ => return false,
        },
        None => s,
    };

    if !host.contains('.') || !is_valid_hostname(host) {
        return false;
    }

    host.rsplit('.')
        .next()
        .map_or(false, |tld| !tld.chars().all(|c| c.is_ascii_digit()))
}

/// Check if a string is a valid hostname.
pub fn is_valid_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }

    // Each label must be 1-63 characters
    for label in s.split('.') {
        if label.is_empty() || label.len() > 63 {
            return false;
        }
        // Must start and end with alphanumeric
        if !label.chars().next().map_or(false, |c| c.is_ascii_alphanumeric()) {
            return false;
        }
        if !label.chars().last().map_or(false, |c| c.is_ascii_alphanumeric()) {
            return false;
        }
        // Can only contain alphanumeric and hyphens
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url() {
        let url = split_url("https://user@GitHub.com:443/owner/repo.git?x=1").unwrap();
        assert_eq!(url.scheme, "https");
        assert_eq!(url.host, "GitHub.com");
        assert_eq!(url.path, "/owner/repo.git");

        let url = split_url("http://[::1]:8080/admin").unwrap();
        assert_eq!(url.host, "[::1]");
        assert_eq!(url.path, "/admin");

        assert!(split_url("github.com/owner/repo").is_none());
        assert!(split_url("git@github.com:owner/repo.git").is_none());
    }

    #[test]
    fn test_ssh_locator() {
        assert!(is_ssh_locator("git@github.com:example/repo.git"));
        assert!(is_ssh_locator("git@gitlab.com:group/sub/repo"));
        assert!(is_ssh_locator("deploy@git.internal:repo.git"));
        assert!(!is_ssh_locator("admin@192.168.1.1:22"));
        assert!(!is_ssh_locator("git@github.com"));
        assert!(!is_ssh_locator("https://github.com/example/repo.git"));
    }

    #[test]
    fn test_git_suffix() {
        assert!(has_git_suffix("/owner/repo.git"));
        assert!(has_git_suffix("/owner/repo.git/"));
        assert!(!has_git_suffix(".git"));
        assert!(!has_git_suffix("/owner/repo"));
    }

    #[test]
    fn test_parse_ip() {
        assert!(parse_ip("192.168.1.1").is_some());
        assert!(parse_ip("::1").is_some());
        assert!(parse_ip("[2001:db8::1]").is_some());
        assert!(parse_ip("[192.168.1.1]").is_none());
        assert!(parse_ip("192.168.1.256").is_none());
        assert!(parse_ip("example.com").is_none());
    }

    #[test]
    fn test_bare_domain() {
        assert!(is_bare_domain("example.com"));
        assert!(is_bare_domain("sub.example.co.uk"));
        assert!(is_bare_domain("app.example.com:8443"));
        assert!(!is_bare_domain("example.com:0"));
        assert!(!is_bare_domain("example.com:http"));
        assert!(!is_bare_domain("not-a-valid-target"));
        assert!(!is_bare_domain("999.1.1.1"));
        assert!(!is_bare_domain(".hidden"));
        assert!(!is_bare_domain("example.com/path"));
        assert!(!is_bare_domain("admin@example.com"));
        assert!(!is_bare_domain("exämple.com"));
    }

    #[test]
    fn test_valid_hostname() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("sub.example.com"));
        assert!(is_valid_hostname("my-server"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("-invalid.com"));
        assert!(!is_valid_hostname("a..b"));
        assert!(!is_valid_hostname("exämple.com"));
        assert!(!is_valid_hostname("münchen.de"));
    }
}
