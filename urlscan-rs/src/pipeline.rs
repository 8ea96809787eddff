//! Classification and evaluation pipeline
//!
//! For each record: extract features once, map the label once, score the
//! same vector with every strategy, and count the outcome per strategy.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::dataset::UrlRecord;
use crate::error::Result;
use crate::eval::{ConfusionCounts, EvaluationReport, Evaluator, StrategyReport};
use crate::features::FeatureExtractor;
use crate::label::LabelMapper;
use crate::scoring::{CountThreshold, ScoringStrategy, WeightedSum};

/// Verdicts for a single URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Ground truth derived from the category
    pub label: bool,
    /// One verdict per strategy, in registration order
    pub verdicts: Vec<bool>,
}

/// Feature extraction, label mapping and strategies wired together
pub struct Pipeline {
    extractor: FeatureExtractor,
    labels: LabelMapper,
    strategies: Vec<Box<dyn ScoringStrategy>>,
}

impl Pipeline {
    /// Build the stock pipeline (count-threshold, then weighted-sum)
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self::empty(config)?
            .with_strategy(CountThreshold::new(&config.count_threshold))
            .with_strategy(WeightedSum::new(&config.weighted_sum)))
    }

    /// Build a pipeline with no strategies registered
    pub fn empty(config: &ScanConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            extractor: FeatureExtractor::new(&config.features)?,
            labels: LabelMapper::new(&config.labels),
            strategies: Vec::new(),
        })
    }

    /// Register an additional strategy
    pub fn with_strategy<S: ScoringStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of registered strategies
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Classify one record with every strategy
    pub fn classify(&self, record: &UrlRecord) -> Classification {
        let features = self.extractor.extract(&record.url);
        let label = self.labels.to_label(&record.category);
        let verdicts = self
            .strategies
            .iter()
            .map(|s| s.score(&features))
            .collect::<Vec<_>>();

        debug!(
            url = %record.url,
            label,
            features = ?features.active().map(|f| f.name()).collect::<Vec<_>>(),
            verdicts = ?verdicts,
            "Classified URL"
        );

        Classification { label, verdicts }
    }

    /// Evaluate every strategy over the records in a single pass
    pub fn run(&self, records: &[UrlRecord]) -> EvaluationReport {
        let mut evaluators = vec![Evaluator::new(); self.strategies.len()];

        for record in records {
            let classification = self.classify(record);
            for (evaluator, verdict) in evaluators.iter_mut().zip(&classification.verdicts) {
                evaluator.observe(classification.label, *verdict);
            }
        }

        self.report(records.len(), evaluators.iter().map(|e| e.counts()).collect())
    }

    /// Same result as `run`, with records sharded across rayon workers
    pub fn run_parallel(&self, records: &[UrlRecord]) -> EvaluationReport {
        let empty = || vec![Evaluator::new(); self.strategies.len()];

        let evaluators = records
            .par_iter()
            .fold(empty, |mut acc, record| {
                let classification = self.classify(record);
                for (evaluator, verdict) in acc.iter_mut().zip(&classification.verdicts) {
                    evaluator.observe(classification.label, *verdict);
                }
                acc
            })
            .reduce(empty, |mut left, right| {
                for (evaluator, shard) in left.iter_mut().zip(&right) {
                    evaluator.absorb(shard.counts());
                }
                left
            });

        self.report(records.len(), evaluators.iter().map(|e| e.counts()).collect())
    }

    fn report(&self, records: usize, counts: Vec<ConfusionCounts>) -> EvaluationReport {
        let strategies = self
            .strategies
            .iter()
            .zip(counts)
            .map(|(strategy, counts)| StrategyReport::new(strategy.name(), counts))
            .collect::<Vec<_>>();

        for report in &strategies {
            info!(
                strategy = %report.name,
                true_positive = report.counts.true_positive,
                false_positive = report.counts.false_positive,
                false_negative = report.counts.false_negative,
                true_negative = report.counts.true_negative,
                "Strategy evaluated"
            );
        }

        EvaluationReport {
            records: records as u64,
            skipped: 0,
            strategies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;

    fn pipeline() -> Pipeline {
        Pipeline::new(&ScanConfig::default()).unwrap()
    }

    fn reference_dataset() -> Vec<UrlRecord> {
        vec![
            UrlRecord::new("http://secure-login.xyz/update=1", "phishing"),
            UrlRecord::new("http://example.com", "benign"),
        ]
    }

    #[test]
    fn test_default_strategies() {
        assert_eq!(
            pipeline().strategy_names(),
            vec![CountThreshold::NAME, WeightedSum::NAME]
        );
    }

    #[test]
    fn test_classify_reference_records() {
        let p = pipeline();
        let data = reference_dataset();
        assert_eq!(
            p.classify(&data[0]),
            Classification {
                label: true,
                verdicts: vec![true, true]
            }
        );
        assert_eq!(
            p.classify(&data[1]),
            Classification {
                label: false,
                verdicts: vec![false, false]
            }
        );
    }

    #[test]
    fn test_reference_dataset_scores_perfectly() {
        let report = pipeline().run(&reference_dataset());
        assert_eq!(report.records, 2);
        for name in [CountThreshold::NAME, WeightedSum::NAME] {
            let strategy = report.get(name).unwrap();
            assert_eq!(strategy.counts.true_positive, 1);
            assert_eq!(strategy.counts.true_negative, 1);
            assert_eq!(strategy.metrics.accuracy, 1.0);
            assert_eq!(strategy.metrics.precision, 1.0);
            assert_eq!(strategy.metrics.recall, 1.0);
            assert_eq!(strategy.metrics.f1, 1.0);
        }
    }

    #[test]
    fn test_empty_dataset() {
        let report = pipeline().run(&[]);
        assert_eq!(report.records, 0);
        for strategy in &report.strategies {
            assert_eq!(strategy.counts.total(), 0);
            assert_eq!(strategy.metrics.accuracy, 0.0);
            assert_eq!(strategy.metrics.f1, 0.0);
        }
    }

    #[test]
    fn test_run_is_idempotent() {
        let p = pipeline();
        let data = reference_dataset();
        assert_eq!(p.run(&data), p.run(&data));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let p = pipeline();
        let mut data = Vec::new();
        for i in 0..500 {
            data.push(UrlRecord::new(format!("http://host{}.com/page", i), "benign"));
            data.push(UrlRecord::new(
                format!("http://verify-account{}.tk/login?u=a@b", i),
                "phishing",
            ));
            data.push(UrlRecord::new(format!("https://update{}.info", i), "malware"));
            data.push(UrlRecord::new(format!("http://shop{}.top/a-b", i), "benign"));
        }
        assert_eq!(p.run_parallel(&data), p.run(&data));
    }

    #[test]
    fn test_strategies_scored_independently() {
        // Symbol + long URL: two flags, weighted sum 8
        let p = pipeline();
        let url = format!("http://example.com/a-{}", "b".repeat(70));
        let c = p.classify(&UrlRecord::new(url, "phishing"));
        assert_eq!(c.verdicts, vec![false, true]);
    }

    #[test]
    fn test_extreme_weights_from_config() {
        let config = ScanConfig::from_toml(
            r#"
[weighted_sum.weights]
suspicious_keyword = 4294967295
unusual_tld = 1
"#,
        )
        .unwrap();
        let p = Pipeline::new(&config).unwrap();
        let data = vec![UrlRecord::new("http://login.xyz", "phishing")];

        let report = p.run(&data);
        let weighted = report.get(WeightedSum::NAME).unwrap();
        assert_eq!(weighted.counts.true_positive, 1);
        assert_eq!(p.run_parallel(&data), report);
    }

    struct AlwaysMalicious;

    impl ScoringStrategy for AlwaysMalicious {
        fn name(&self) -> &str {
            "always"
        }

        fn score(&self, _features: &FeatureVector) -> bool {
            true
        }
    }

    #[test]
    fn test_custom_strategy() {
        let p = Pipeline::empty(&ScanConfig::default())
            .unwrap()
            .with_strategy(AlwaysMalicious);
        let report = p.run(&reference_dataset());
        let always = report.get("always").unwrap();
        assert_eq!(always.counts.true_positive, 1);
        assert_eq!(always.counts.false_positive, 1);
        assert_eq!(always.metrics.recall, 1.0);
        assert_eq!(always.metrics.precision, 0.5);
    }
}
