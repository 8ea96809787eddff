//! Count-threshold strategy

use super::ScoringStrategy;
use crate::config::CountThresholdConfig;
use crate::features::FeatureVector;

/// Flags a URL when more than `cutoff` features are set
#[derive(Debug, Clone)]
pub struct CountThreshold {
    cutoff: u32,
}

impl CountThreshold {
    pub const NAME: &'static str = "count-threshold";

    /// Create from configuration
    pub fn new(config: &CountThresholdConfig) -> Self {
        Self {
            cutoff: config.cutoff,
        }
    }
}

impl Default for CountThreshold {
    fn default() -> Self {
        Self::new(&CountThresholdConfig::default())
    }
}

impl ScoringStrategy for CountThreshold {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn score(&self, features: &FeatureVector) -> bool {
        features.count() > self.cutoff
    }
}
