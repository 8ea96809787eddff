//! Evaluation module
//!
//! Scores strategy verdicts against ground truth and renders the result.

pub mod evaluator;
pub mod report;
pub mod types;

pub use evaluator::{evaluate, Evaluator};
pub use report::{render, render_text, ReportFormat};
pub use types::*;
