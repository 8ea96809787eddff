//! URL feature module
//!
//! Turns raw URL text into a fixed set of boolean signals.

pub mod extractor;
pub mod types;

pub use extractor::FeatureExtractor;
pub use types::*;
