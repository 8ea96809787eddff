//! Report rendering

use std::str::FromStr;

use super::types::{EvaluationReport, MetricsReport};
use crate::error::Result;

/// Output format for an evaluation report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One block of metrics per strategy
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}

/// Render a report in the requested format
pub fn render(report: &EvaluationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Plain-text report, three decimals per metric
pub fn render_text(report: &EvaluationReport) -> String {
    report
        .strategies
        .iter()
        .map(|strategy| format!("\n{}\n{}", strategy.name, metrics_block(&strategy.metrics)))
        .collect()
}

fn metrics_block(m: &MetricsReport) -> String {
    format!(
        "Accuracy Score: {:.3}\nPrecision Score: {:.3}\nRecall: {:.3}\nF1 Score: {:.3}\n",
        m.accuracy, m.precision, m.recall, m.f1
    )
}
