//! Evaluation types and data structures

use serde::{Deserialize, Serialize};

/// Four-way tally of verdicts against ground truth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
}

impl ConfusionCounts {
    /// Count one (label, verdict) pair
    pub fn record(&mut self, label: bool, verdict: bool) {
        match (verdict, label) {
            (true, true) => self.true_positive += 1,
            (true, false) => self.false_positive += 1,
            (false, true) => self.false_negative += 1,
            (false, false) => self.true_negative += 1,
        }
    }

    /// Sum two tallies
    pub fn merge(self, other: Self) -> Self {
        Self {
            true_positive: self.true_positive + other.true_positive,
            false_positive: self.false_positive + other.false_positive,
            false_negative: self.false_negative + other.false_negative,
            true_negative: self.true_negative + other.true_negative,
        }
    }

    /// Number of pairs counted
    pub fn total(&self) -> u64 {
        self.true_positive + self.false_positive + self.false_negative + self.true_negative
    }
}

/// Classification metrics for one strategy
///
/// Every ratio with a zero denominator is 0 rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl MetricsReport {
    /// Derive metrics from final counts
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        let tp = counts.true_positive;
        let precision = ratio(tp, tp + counts.false_positive);
        let recall = ratio(tp, tp + counts.false_negative);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Self {
            accuracy: ratio(tp + counts.true_negative, counts.total()),
            precision,
            recall,
            f1,
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Result of one strategy over a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    /// Strategy name
    pub name: String,
    /// Final confusion counts
    pub counts: ConfusionCounts,
    /// Metrics derived from `counts`
    pub metrics: MetricsReport,
}

impl StrategyReport {
    pub fn new(name: impl Into<String>, counts: ConfusionCounts) -> Self {
        Self {
            name: name.into(),
            counts,
            metrics: MetricsReport::from_counts(&counts),
        }
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Records evaluated
    pub records: u64,
    /// Malformed rows dropped before evaluation
    pub skipped: u64,
    /// One entry per strategy, in registration order
    pub strategies: Vec<StrategyReport>,
}

impl EvaluationReport {
    /// Look up a strategy's report by name
    pub fn get(&self, name: &str) -> Option<&StrategyReport> {
        self.strategies.iter().find(|s| s.name == name)
    }

    /// Same report with the loader's skip count attached
    pub fn with_skipped(self, skipped: u64) -> Self {
        Self { skipped, ..self }
    }
}
