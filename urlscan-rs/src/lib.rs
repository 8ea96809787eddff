//! urlscan-rs: Heuristic malicious URL classifier
//!
//! Flags URLs as malicious or benign from a handful of hand-written
//! lexical signals, then measures how well each scoring rule agrees with
//! labeled ground truth.
//!
//! # Features
//!
//! - Five boolean URL signals (keywords, TLDs, symbols, double slashes, length)
//! - Two scoring strategies: flag count and weighted sum
//! - Accuracy, precision, recall and F1 per strategy
//! - CSV dataset loading with skip or abort handling of malformed rows
//! - Sequential or rayon-parallel evaluation with identical results
//!
//! # Example Configuration
//!
//! ```toml
//! [features]
//! keywords = ["login", "verify", "secure", "update"]
//! long_url_threshold = 75
//!
//! [weighted_sum]
//! cutoff = 8
//!
//! [weighted_sum.weights]
//! contains_symbol = 5
//!
//! [dataset]
//! url_column = "url"
//! category_column = "type"
//! on_malformed = "skip"
//! ```
//!
//! # Example
//!
//! ```
//! use urlscan_rs::{Pipeline, ScanConfig, UrlRecord};
//!
//! let pipeline = Pipeline::new(&ScanConfig::default()).unwrap();
//! let report = pipeline.run(&[
//!     UrlRecord::new("http://secure-login.xyz/update=1", "phishing"),
//!     UrlRecord::new("http://example.com", "benign"),
//! ]);
//!
//! assert_eq!(report.get("weighted-sum").unwrap().metrics.f1, 1.0);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod features;
pub mod label;
pub mod pipeline;
pub mod scoring;

pub use config::ScanConfig;
pub use dataset::{Dataset, UrlRecord};
pub use error::{Result, ScanError};
pub use eval::{EvaluationReport, MetricsReport, ReportFormat};
pub use features::{Feature, FeatureExtractor, FeatureVector};
pub use label::LabelMapper;
pub use pipeline::Pipeline;
pub use scoring::{CountThreshold, ScoringStrategy, WeightedSum};
