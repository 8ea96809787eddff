//! Per-strategy metric accumulation

use super::types::{ConfusionCounts, MetricsReport};

/// Accumulates (label, verdict) pairs for one strategy
///
/// Starts from empty counts; build a fresh one per run.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    counts: ConfusionCounts,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one pair
    pub fn observe(&mut self, label: bool, verdict: bool) {
        self.counts.record(label, verdict);
    }

    /// Fold in counts from another shard
    pub fn absorb(&mut self, counts: ConfusionCounts) {
        self.counts = self.counts.merge(counts);
    }

    /// Counts so far
    pub fn counts(&self) -> ConfusionCounts {
        self.counts
    }

    /// Final metrics
    pub fn finish(&self) -> MetricsReport {
        MetricsReport::from_counts(&self.counts)
    }
}

/// Evaluate a sequence of (ground truth, verdict) pairs in one go
pub fn evaluate<I>(pairs: I) -> MetricsReport
where
    I: IntoIterator<Item = (bool, bool)>,
{
    let mut evaluator = Evaluator::new();
    for (label, verdict) in pairs {
        evaluator.observe(label, verdict);
    }
    evaluator.finish()
}
