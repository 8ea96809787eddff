//! Weighted-sum strategy

use super::ScoringStrategy;
use crate::config::{FeatureWeights, WeightedSumConfig};
use crate::features::{Feature, FeatureVector};

/// Flags a URL when the weighted sum of its features reaches `cutoff`
#[derive(Debug, Clone)]
pub struct WeightedSum {
    weights: FeatureWeights,
    cutoff: u32,
}

impl WeightedSum {
    pub const NAME: &'static str = "weighted-sum";

    /// Create from configuration
    pub fn new(config: &WeightedSumConfig) -> Self {
        Self {
            weights: config.weights,
            cutoff: config.cutoff,
        }
    }

    /// Weight assigned to a feature
    pub fn weight(&self, feature: Feature) -> u32 {
        match feature {
            Feature::SuspiciousKeyword => self.weights.suspicious_keyword,
            Feature::UnusualTld => self.weights.unusual_tld,
            Feature::ContainsSymbol => self.weights.contains_symbol,
            Feature::DoubleSlashAfterScheme => self.weights.double_slash_after_scheme,
            Feature::LongUrl => self.weights.long_url,
        }
    }

    /// Sum of the weights of all set features, widened so five `u32` weights cannot overflow
    pub fn total(&self, features: &FeatureVector) -> u64 {
        features.active().map(|f| u64::from(self.weight(f))).sum()
    }
}

impl Default for WeightedSum {
    fn default() -> Self {
        Self::new(&WeightedSumConfig::default())
    }
}

impl ScoringStrategy for WeightedSum {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn score(&self, features: &FeatureVector) -> bool {
        self.total(features) >= u64::from(self.cutoff)
    }
}
