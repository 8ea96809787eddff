//! Scoring strategies
//!
//! A strategy turns a feature vector into a malicious/benign verdict. The
//! pipeline treats every strategy the same way, so new rules only need a
//! `ScoringStrategy` impl.

pub mod count;
pub mod weighted;

pub use count::CountThreshold;
pub use weighted::WeightedSum;

use crate::features::FeatureVector;

/// Rule converting a feature vector into a verdict
pub trait ScoringStrategy: Send + Sync {
    /// Name used in reports
    fn name(&self) -> &str;

    /// `true` when the URL is judged malicious
    fn score(&self, features: &FeatureVector) -> bool;
}
