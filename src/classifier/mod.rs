//! Target classification.
//!
//! Turns a free-form target string into a [`TargetType`] and its normalized
//! [`TargetParameters`] by walking an ordered rule chain:
//!
//! 1. IP address literal
//! 2. Repository reference (SSH locator, `.git` URL, `host/owner/repo`)
//! 3. Existing local directory
//! 4. Web application (URL or bare domain)
//!
//! The first matching rule decides. Classification never touches the
//! network; the local-path rule performs a single stat and canonicalize.

mod patterns;
mod rules;

pub use patterns::{
    is_bare_domain, is_ssh_locator, is_valid_hostname, parse_ip, split_url, UrlParts,
};
pub use rules::{Normalizer, Predicate, Rule, RULES};

use crate::config::AppSettings;
use crate::error::{InvalidTargetError, TargetResult};
use crate::types::{
    ClassificationReport, RejectedTarget, TargetInfo, TargetParameters, TargetType,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Classify a target using default settings.
///
/// ```
/// use targetscope::{infer_target_type, TargetParameters, TargetType};
///
/// let (ty, params) = infer_target_type(Some("github.com/example/repo")).unwrap();
/// assert_eq!(ty, TargetType::Repository);
/// assert_eq!(
///     params,
///     TargetParameters::TargetRepo("https://github.com/example/repo".to_string())
/// );
/// ```
pub fn infer_target_type(raw: Option<&str>) -> TargetResult<(TargetType, TargetParameters)> {
    Classifier::default().classify(raw)
}

/// Classifies targets against a fixed set of settings.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    settings: AppSettings,
}

impl Classifier {
    /// Create a classifier with the given settings.
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    /// The settings this classifier uses.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// The rule chain, in priority order.
    pub fn rules() -> &'static [Rule] {
        &RULES
    }

    /// Classify a single raw target.
    ///
    /// Absent, empty and whitespace-only inputs are rejected.
    pub fn classify(&self, raw: Option<&str>) -> TargetResult<(TargetType, TargetParameters)> {
        let input = raw.map(str::trim).unwrap_or_default();
        if input.is_empty() {
            return Err(InvalidTargetError::Empty);
        }

        for rule in Self::rules() {
            if rule.matches(input, &self.settings) {
                debug!(input, rule = rule.name, "target matched");
                let params = rule.apply(input, &self.settings)?;
                return Ok((rule.target_type, params));
            }
        }

        debug!(input, "no rule matched");
        Err(InvalidTargetError::Unrecognized(input.to_string()))
    }

    /// Classify a single target, keeping the original input alongside.
    pub fn classify_target(&self, raw: &str) -> TargetResult<TargetInfo> {
        let (_, params) = self.classify(Some(raw))?;
        Ok(TargetInfo::new(raw, params))
    }

    /// Classify every input, collecting failures instead of stopping.
    ///
    /// Targets that normalize to the same value are reported once, under the
    /// first input that produced them.
    pub fn classify_all<I, S>(&self, inputs: I) -> ClassificationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ClassificationReport::new();
        let mut seen: HashSet<TargetParameters> = HashSet::new();

        for input in inputs {
            let input = input.as_ref();
            match self.classify_target(input) {
                Ok(info) => {
                    if seen.insert(info.details.clone()) {
                        report.targets.push(info);
                    } else {
                        debug!(input, "duplicate target skipped");
                    }
                }
                Err(e) => {
                    warn!(input, error = %e, "target rejected");
                    report.rejected.push(RejectedTarget {
                        input: input.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }
}

/// Parse a targets file: one target per line.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn parse_target_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_rejected() {
        let classifier = Classifier::default();
        for raw in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(classifier.classify(raw), Err(InvalidTargetError::Empty));
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let (ty, params) = infer_target_type(Some("  192.168.1.1\n")).unwrap();
        assert_eq!(ty, TargetType::IpAddress);
        assert_eq!(params.value(), "192.168.1.1");
    }

    #[test]
    fn test_unrecognized() {
        let result = infer_target_type(Some("not-a-valid-target"));
        assert_eq!(
            result,
            Err(InvalidTargetError::Unrecognized("not-a-valid-target".to_string()))
        );
    }

    #[test]
    fn test_params_match_type() {
        let classifier = Classifier::default();
        for raw in [
            "10.0.0.1",
            "git@github.com:example/repo.git",
            "example.com",
            "https://example.com/app",
        ] {
            let (ty, params) = classifier.classify(Some(raw)).unwrap();
            assert_eq!(params.target_type(), ty, "mismatch for {}", raw);
        }
    }

    #[test]
    fn test_classify_all_dedupes_and_collects_failures() {
        let classifier = Classifier::default();
        let report = classifier.classify_all([
            "github.com/example/repo",
            "https://github.com/example/repo",
            "nope",
            "example.com",
        ]);

        assert_eq!(report.targets.len(), 2);
        assert_eq!(report.targets[0].original, "github.com/example/repo");
        assert_eq!(report.targets[1].target_type, TargetType::WebApplication);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].input, "nope");
    }

    #[test]
    fn test_parse_target_list() {
        let targets = parse_target_list("\n# staging\nexample.com\n  10.0.0.1  \n\n#skip\n");
        assert_eq!(targets, vec!["example.com", "10.0.0.1"]);
    }
}
