//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{text_bar, ReportError, ReportFormat, ReportGenerator, ALL_TARGETS_MET, BAR_WIDTH};
use crate::readiness::{Category, ReadinessResult, ScoreInputs, SkillBand};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn band_color(band: SkillBand) -> &'static str {
    match band {
        SkillBand::Weak => "red",
        SkillBand::Fair => "yellow",
        SkillBand::Strong => "green",
    }
}

const fn category_color(category: Category) -> &'static str {
    match category {
        Category::Beginner => "red",
        Category::Developing => "yellow",
        Category::AlmostReady => "cyan",
        Category::PlacementReady => "green",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        _inputs: &ScoreInputs,
        result: &ReadinessResult,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Placement Readiness", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{} {}",
            self.color("Your Readiness Score:", "cyan"),
            self.color(&format!("{:.2}", result.score), "bold")
        ));
        lines.push(format!(
            "{} {}",
            self.color("Category:", "cyan"),
            self.color(result.category.label(), category_color(result.category))
        ));

        lines.push(String::new());
        lines.push(self.color("Skill Overview", "bold"));
        for (skill, value) in &result.skill_breakdown {
            let band = SkillBand::from_value(*value);
            lines.push(format!(
                "  {:<15} {} {:>5.1}%",
                skill.name(),
                self.color(&text_bar(*value, BAR_WIDTH), band_color(band)),
                value
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Suggestions to Improve", "bold"));
        if result.suggestions.is_empty() {
            lines.push(self.color(ALL_TARGETS_MET, "green"));
        } else {
            for suggestion in &result.suggestions {
                lines.push(format!("- {suggestion}"));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
