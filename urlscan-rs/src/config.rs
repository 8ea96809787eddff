//! Configuration for urlscan-rs
//!
//! Every heuristic constant lives here. `ScanConfig::default()` reproduces the
//! stock rule set; a TOML file may override any subset of it.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScanError};

/// Substrings that mark a URL as trying to look like an account flow
pub const DEFAULT_KEYWORDS: &[&str] = &["login", "verify", "secure", "update"];

/// Top-level domains over-represented in abuse feeds
pub const DEFAULT_UNUSUAL_TLDS: &[&str] = &["xyz", "info", "top", "ru", "cc", "pw", "cn", "tk"];

/// Characters used to obfuscate hosts or smuggle parameters
pub const DEFAULT_SYMBOLS: &[char] = &['@', '=', '-'];

/// URLs longer than this many characters are flagged
pub const DEFAULT_LONG_URL_THRESHOLD: usize = 75;

/// Categories counted as malicious ground truth
pub const DEFAULT_MALICIOUS_CATEGORIES: &[&str] = &["phishing", "malware", "defacement"];

/// Count-threshold strategy fires when more than this many flags are set
pub const DEFAULT_COUNT_CUTOFF: u32 = 2;

/// Weighted-sum strategy fires at or above this total
pub const DEFAULT_WEIGHTED_CUTOFF: u32 = 8;

/// Main scan configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Feature extraction rules
    pub features: FeatureConfig,
    /// Ground-truth label mapping
    pub labels: LabelConfig,
    /// Count-threshold strategy
    pub count_threshold: CountThresholdConfig,
    /// Weighted-sum strategy
    pub weighted_sum: WeightedSumConfig,
    /// Dataset loading
    pub dataset: DatasetConfig,
}

/// Feature extraction configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeatureConfig {
    /// Suspicious keywords, matched case-insensitively
    pub keywords: Vec<String>,
    /// Unusual TLDs without the leading dot, matched case-insensitively
    pub unusual_tlds: Vec<String>,
    /// Symbol characters, matched exactly
    pub symbols: Vec<char>,
    /// Length in characters above which a URL is long
    pub long_url_threshold: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            keywords: to_strings(DEFAULT_KEYWORDS),
            unusual_tlds: to_strings(DEFAULT_UNUSUAL_TLDS),
            symbols: DEFAULT_SYMBOLS.to_vec(),
            long_url_threshold: DEFAULT_LONG_URL_THRESHOLD,
        }
    }
}

/// Label mapping configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    /// Categories mapped to the malicious label
    pub malicious_categories: Vec<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            malicious_categories: to_strings(DEFAULT_MALICIOUS_CATEGORIES),
        }
    }
}

/// Count-threshold strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CountThresholdConfig {
    /// Verdict is malicious when the flag count is strictly above this
    pub cutoff: u32,
}

impl Default for CountThresholdConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_COUNT_CUTOFF,
        }
    }
}

/// Weighted-sum strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WeightedSumConfig {
    /// Verdict is malicious when the weighted sum reaches this
    pub cutoff: u32,
    /// Per-feature weights
    pub weights: FeatureWeights,
}

impl Default for WeightedSumConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_WEIGHTED_CUTOFF,
            weights: FeatureWeights::default(),
        }
    }
}

/// Weight of each feature in the weighted-sum strategy
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureWeights {
    pub suspicious_keyword: u32,
    pub unusual_tld: u32,
    pub contains_symbol: u32,
    pub double_slash_after_scheme: u32,
    pub long_url: u32,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            suspicious_keyword: 2,
            unusual_tld: 3,
            contains_symbol: 5,
            double_slash_after_scheme: 2,
            long_url: 3,
        }
    }
}

/// What to do with a row missing its URL or category
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the row and count it
    #[default]
    Skip,
    /// Fail the whole load
    Abort,
}

/// Dataset loading configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Header name of the URL column
    pub url_column: String,
    /// Header name of the category column
    pub category_column: String,
    /// Malformed row handling
    pub on_malformed: MalformedPolicy,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url_column: "url".to_string(),
            category_column: "type".to_string(),
            on_malformed: MalformedPolicy::Skip,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ScanConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScanError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ScanError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.features.keywords.iter().any(|k| k.is_empty()) {
            return Err(ScanError::Config("Empty keyword in features.keywords".to_string()));
        }

        if self.features.unusual_tlds.iter().any(|t| t.is_empty()) {
            return Err(ScanError::Config(
                "Empty TLD in features.unusual_tlds".to_string(),
            ));
        }

        if let Some(tld) = self
            .features
            .unusual_tlds
            .iter()
            .find(|t| t.starts_with('.'))
        {
            return Err(ScanError::Config(format!(
                "TLD '{}' must be given without the leading dot",
                tld
            )));
        }

        if self.labels.malicious_categories.iter().any(|c| c.is_empty()) {
            return Err(ScanError::Config(
                "Empty category in labels.malicious_categories".to_string(),
            ));
        }

        if self.dataset.url_column.is_empty() || self.dataset.category_column.is_empty() {
            return Err(ScanError::Config("Dataset column names must not be empty".to_string()));
        }

        Ok(())
    }
}
