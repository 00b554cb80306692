//! Core type definitions for classified targets.
//!
//! `TargetParameters` carries exactly one value per variant, so a target can
//! never hold a key that disagrees with its type.

mod report;
mod target;

pub use report::{ClassificationReport, RejectedTarget};
pub use target::{TargetInfo, TargetParameters, TargetType};
