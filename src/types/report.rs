//! Batch classification report.

use super::target::{TargetInfo, TargetType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An input that could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedTarget {
    /// The input as given.
    pub input: String,
    /// Why classification failed.
    pub reason: String,
}

/// The outcome of classifying a list of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Successfully classified targets, in input order, deduplicated.
    pub targets: Vec<TargetInfo>,
    /// Inputs that failed classification.
    pub rejected: Vec<RejectedTarget>,
}

impl ClassificationReport {
    /// Create an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            targets: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Whether every input was classified.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Number of targets of the given type.
    pub fn count(&self, target_type: TargetType) -> usize {
        self.targets
            .iter()
            .filter(|t| t.target_type == target_type)
            .count()
    }

    /// Get a short summary of the report.
    pub fn summary(&self) -> String {
        format!(
            "{} targets ({} ip, {} repo, {} web, {} local), {} rejected",
            self.targets.len(),
            self.count(TargetType::IpAddress),
            self.count(TargetType::Repository),
            self.count(TargetType::WebApplication),
            self.count(TargetType::LocalCode),
            self.rejected.len()
        )
    }
}

impl Default for ClassificationReport {
    fn default() -> Self {
        Self::new()
    }
}
