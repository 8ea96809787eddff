//! URL feature extraction
//!
//! Each flag is computed by its own rule; `extract` just runs them all.

use regex::Regex;

use super::types::FeatureVector;
use crate::config::FeatureConfig;
use crate::error::{Result, ScanError};

/// Extracts boolean features from raw URL text
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    keywords: Vec<String>,
    tld_pattern: Option<Regex>,
    scheme_pattern: Regex,
    symbols: Vec<char>,
    long_url_threshold: usize,
}

impl FeatureExtractor {
    /// Create an extractor from feature configuration
    pub fn new(config: &FeatureConfig) -> Result<Self> {
        let tld_pattern = if config.unusual_tlds.is_empty() {
            None
        } else {
            let alternatives = config
                .unusual_tlds
                .iter()
                .map(|tld| regex::escape(tld))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(r"(?i)\.(?:{})", alternatives))?)
        };

        Ok(Self {
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            tld_pattern,
            scheme_pattern: compile(r"(?i)^[a-z]+://")?,
            symbols: config.symbols.clone(),
            long_url_threshold: config.long_url_threshold,
        })
    }

    /// Extract the full feature vector for a URL
    pub fn extract(&self, url: &str) -> FeatureVector {
        FeatureVector {
            suspicious_keyword: self.has_suspicious_keyword(url),
            unusual_tld: self.has_unusual_tld(url),
            contains_symbol: self.has_symbol(url),
            double_slash_after_scheme: self.has_double_slash_after_scheme(url),
            long_url: self.is_long(url),
        }
    }

    /// Any configured keyword appears, ignoring case
    pub fn has_suspicious_keyword(&self, url: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let lower = url.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// A dot followed by a configured TLD appears anywhere, ignoring case
    pub fn has_unusual_tld(&self, url: &str) -> bool {
        self.tld_pattern
            .as_ref()
            .map(|re| re.is_match(url))
            .unwrap_or(false)
    }

    /// Any configured symbol character appears
    pub fn has_symbol(&self, url: &str) -> bool {
        url.chars().any(|c| self.symbols.contains(&c))
    }

    /// `//` remains once a leading `scheme://` is removed
    pub fn has_double_slash_after_scheme(&self, url: &str) -> bool {
        let rest = match self.scheme_pattern.find(url) {
            Some(m) => &url[m.end()..],
            None => url,
        };
        rest.contains("//")
    }

    /// Character length strictly exceeds the threshold
    pub fn is_long(&self, url: &str) -> bool {
        url.chars().count() > self.long_url_threshold
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ScanError::Config(format!("Invalid pattern '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Feature;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(&FeatureConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_url_has_no_features() {
        assert_eq!(extractor().extract(""), FeatureVector::default());
    }

    #[test]
    fn test_plain_url_has_no_features() {
        let fv = extractor().extract("http://example.com/index.html");
        assert_eq!(fv.count(), 0);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let ex = extractor();
        assert!(ex.has_suspicious_keyword("http://bank.com/LOGIN"));
        assert!(ex.has_suspicious_keyword("VeRiFy.example.org"));
        assert!(ex.has_suspicious_keyword("softwareupdate.com"));
        assert!(!ex.has_suspicious_keyword("http://example.com/logout"));
    }

    #[test]
    fn test_unusual_tld() {
        let ex = extractor();
        assert!(ex.has_unusual_tld("http://free-stuff.XYZ/"));
        assert!(ex.has_unusual_tld("yandex.ru"));
        assert!(ex.has_unusual_tld("shop.top/path"));
        // Unanchored: a dotted prefix of a longer label still counts
        assert!(ex.has_unusual_tld("example.com/page.information"));
        assert!(!ex.has_unusual_tld("example.com/xyz"));
        assert!(!ex.has_unusual_tld("example.org"));
    }

    #[test]
    fn test_symbols_exact() {
        let ex = extractor();
        assert!(ex.has_symbol("user@host.com"));
        assert!(ex.has_symbol("a.com/?id=1"));
        assert!(ex.has_symbol("my-site.com"));
        assert!(!ex.has_symbol("example.com/a_b"));
    }

    #[test]
    fn test_double_slash_after_scheme() {
        let ex = extractor();
        assert!(!ex.has_double_slash_after_scheme("http://example.com/a"));
        assert!(!ex.has_double_slash_after_scheme("HTTPS://example.com/a"));
        assert!(ex.has_double_slash_after_scheme("http://example.com//a"));
        assert!(ex.has_double_slash_after_scheme("https://a.com/r?u=http://b.com"));
        assert!(ex.has_double_slash_after_scheme("example.com//a"));
        // Scheme must be letters only
        assert!(ex.has_double_slash_after_scheme("h2p://example.com"));
        assert!(ex.has_double_slash_after_scheme("//cdn.example.com"));
    }

    #[test]
    fn test_long_url_boundary() {
        let ex = extractor();
        let at_limit = "a".repeat(75);
        let over_limit = "a".repeat(76);
        assert!(!ex.is_long(&at_limit));
        assert!(ex.is_long(&over_limit));
    }

    #[test]
    fn test_long_url_counts_characters() {
        let ex = extractor();
        // 40 two-byte characters: 80 bytes, 40 chars
        let url = "é".repeat(40);
        assert!(!ex.is_long(&url));
    }

    #[test]
    fn test_reference_phishing_url() {
        let fv = extractor().extract("http://secure-login.xyz/update=1");
        assert!(fv.suspicious_keyword);
        assert!(fv.unusual_tld);
        assert!(fv.contains_symbol);
        assert!(!fv.double_slash_after_scheme);
        assert!(!fv.long_url);
        assert_eq!(fv.active().collect::<Vec<_>>().len(), 3);
        assert!(fv.get(Feature::SuspiciousKeyword));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let ex = extractor();
        let url = "http://paypal.com-verify.account.tk//signin?user=a@b";
        assert_eq!(ex.extract(url), ex.extract(url));
    }

    #[test]
    fn test_custom_config() {
        let config = FeatureConfig {
            keywords: vec!["Bank".to_string()],
            unusual_tlds: vec![],
            symbols: vec!['~'],
            long_url_threshold: 10,
        };
        let ex = FeatureExtractor::new(&config).unwrap();
        let fv = ex.extract("http://mybank.ru/~x");
        assert!(fv.suspicious_keyword);
        assert!(!fv.unusual_tld);
        assert!(fv.contains_symbol);
        assert!(fv.long_url);
    }
}
