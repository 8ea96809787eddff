//! Ground-truth label mapping

use std::collections::HashSet;

use crate::config::LabelConfig;

/// Maps dataset categories onto the binary malicious/benign label
///
/// The malicious set is closed: any category outside it is benign,
/// including empty and unknown ones.
#[derive(Debug, Clone)]
pub struct LabelMapper {
    malicious: HashSet<String>,
}

impl LabelMapper {
    /// Create a mapper from label configuration
    pub fn new(config: &LabelConfig) -> Self {
        Self {
            malicious: config
                .malicious_categories
                .iter()
                .cloned()
                .collect(),
        }
    }

    /// `true` when the category is malicious
    pub fn to_label(&self, category: &str) -> bool {
        self.malicious.contains(category)
    }
}

impl Default for LabelMapper {
    fn default() -> Self {
        Self::new(&LabelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let mapper = LabelMapper::default();
        assert!(mapper.to_label("phishing"));
        assert!(mapper.to_label("malware"));
        assert!(mapper.to_label("defacement"));
        assert!(!mapper.to_label("benign"));
        assert!(!mapper.to_label(""));
        assert!(!mapper.to_label("unknown_category"));
    }

    #[test]
    fn test_padded_category_is_benign() {
        let mapper = LabelMapper::default();
        assert!(!mapper.to_label(" phishing"));
        assert!(!mapper.to_label("phishing\n"));
        assert!(!mapper.to_label(" malware "));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mapper = LabelMapper::default();
        assert!(!mapper.to_label("Phishing"));
    }

    #[test]
    fn test_custom_set() {
        let mapper = LabelMapper::new(&LabelConfig {
            malicious_categories: vec!["spam".to_string()],
        });
        assert!(mapper.to_label("spam"));
        assert!(!mapper.to_label("phishing"));
    }
}
