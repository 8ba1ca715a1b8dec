//! Report generation for readiness results.
//!
//! This module provides the non-interactive output formats:
//! - Summary: Compact, optionally coloured terminal output
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//!
//! The interactive dashboard lives in [`crate::tui`].

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::readiness::{ReadinessResult, ScoreInputs};
use std::io::Write;
use thiserror::Error;

/// Bar width, in cells, used by the text renderers.
pub const BAR_WIDTH: usize = 20;

/// Message shown in place of the suggestion list when every target is met.
pub const ALL_TARGETS_MET: &str = "Great job! You are Placement Ready!";

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format {0} is not a file report")]
    UnsupportedFormat(ReportFormat),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report for one scored set of inputs
    fn generate(&self, inputs: &ScoreInputs, result: &ReadinessResult)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        inputs: &ScoreInputs,
        result: &ReadinessResult,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(inputs, result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Build the reporter for a concrete (non-interactive) format.
pub fn create_reporter(
    format: ReportFormat,
    colored: bool,
) -> Result<Box<dyn ReportGenerator>, ReportError> {
    match format {
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Ok(Box::new(if colored {
                reporter
            } else {
                reporter.no_color()
            }))
        }
        ReportFormat::Json => Ok(Box::new(JsonReporter::new())),
        ReportFormat::Markdown => Ok(Box::new(MarkdownReporter::new())),
        ReportFormat::Auto | ReportFormat::Tui => Err(ReportError::UnsupportedFormat(format)),
    }
}

/// Render a 0-100 value as a fixed-width block bar.
#[must_use]
pub fn text_bar(value: f64, width: usize) -> String {
    let filled = filled_cells(value, width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Number of filled cells for a 0-100 value.
#[must_use]
pub fn filled_cells(value: f64, width: usize) -> usize {
    let ratio = if value.is_finite() {
        value.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    ((ratio * width as f64).round() as usize).min(width)
}
