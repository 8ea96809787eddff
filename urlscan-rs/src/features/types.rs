//! Feature types and data structures

use serde::{Deserialize, Serialize};

/// A single boolean URL signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// URL mentions an account-flow keyword
    SuspiciousKeyword,
    /// URL contains an abuse-prone TLD
    UnusualTld,
    /// URL contains an obfuscation symbol
    ContainsSymbol,
    /// `//` appears after the scheme separator
    DoubleSlashAfterScheme,
    /// URL is longer than the configured threshold
    LongUrl,
}

impl Feature {
    /// All features in vector order
    pub const ALL: [Feature; 5] = [
        Feature::SuspiciousKeyword,
        Feature::UnusualTld,
        Feature::ContainsSymbol,
        Feature::DoubleSlashAfterScheme,
        Feature::LongUrl,
    ];

    /// Stable snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Feature::SuspiciousKeyword => "suspicious_keyword",
            Feature::UnusualTld => "unusual_tld",
            Feature::ContainsSymbol => "contains_symbol",
            Feature::DoubleSlashAfterScheme => "double_slash_after_scheme",
            Feature::LongUrl => "long_url",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean flags extracted from one URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector {
    pub suspicious_keyword: bool,
    pub unusual_tld: bool,
    pub contains_symbol: bool,
    pub double_slash_after_scheme: bool,
    pub long_url: bool,
}

impl FeatureVector {
    /// Read one flag
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::SuspiciousKeyword => self.suspicious_keyword,
            Feature::UnusualTld => self.unusual_tld,
            Feature::ContainsSymbol => self.contains_symbol,
            Feature::DoubleSlashAfterScheme => self.double_slash_after_scheme,
            Feature::LongUrl => self.long_url,
        }
    }

    /// Copy of this vector with one flag replaced
    pub fn with(mut self, feature: Feature, value: bool) -> Self {
        let slot = match feature {
            Feature::SuspiciousKeyword => &mut self.suspicious_keyword,
            Feature::UnusualTld => &mut self.unusual_tld,
            Feature::ContainsSymbol => &mut self.contains_symbol,
            Feature::DoubleSlashAfterScheme => &mut self.double_slash_after_scheme,
            Feature::LongUrl => &mut self.long_url,
        };
        *slot = value;
        self
    }

    /// Features that are set, in vector order
    pub fn active(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.get(*f))
    }

    /// Number of set flags
    pub fn count(&self) -> u32 {
        self.active().count() as u32
    }

    /// Build a vector from the low five bits of `bits`, bit `i` mapping to `Feature::ALL[i]`
    #[cfg(test)]
    pub(crate) fn from_bits(bits: u8) -> Self {
        Feature::ALL
            .into_iter()
            .enumerate()
            .fold(Self::default(), |fv, (i, f)| fv.with(f, bits & (1 << i) != 0))
    }
}
