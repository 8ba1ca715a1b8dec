//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::readiness::{Category, ReadinessResult, ScoreInputs, Skill};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        inputs: &ScoreInputs,
        result: &ReadinessResult,
    ) -> Result<String, ReportError> {
        let report = JsonReadinessReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: Utc::now().to_rfc3339(),
            inputs: *inputs,
            result: JsonResult {
                score: result.score,
                category: result.category,
                category_label: result.category.label(),
                suggestions: result.suggestion_texts(),
                skill_breakdown: &result.skill_breakdown,
            },
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonReadinessReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    inputs: ScoreInputs,
    result: JsonResult<'a>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    score: f64,
    category: Category,
    category_label: &'static str,
    suggestions: Vec<&'a str>,
    skill_breakdown: &'a IndexMap<Skill, f64>,
}
