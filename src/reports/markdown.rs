//! Markdown report generator.

use super::{text_bar, ReportError, ReportFormat, ReportGenerator, ALL_TARGETS_MET, BAR_WIDTH};
use crate::readiness::{ReadinessResult, ScoreInputs, SkillBand};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    include_inputs: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_inputs: true,
        }
    }

    /// Omit the raw inputs table
    #[must_use]
    pub const fn without_inputs(mut self) -> Self {
        self.include_inputs = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn band_label(band: SkillBand) -> &'static str {
    match band {
        SkillBand::Weak => "weak",
        SkillBand::Fair => "fair",
        SkillBand::Strong => "strong",
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        inputs: &ScoreInputs,
        result: &ReadinessResult,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# Placement Readiness Report\n").ok();
        writeln!(md, "**Your Readiness Score:** {:.2}  ", result.score).ok();
        writeln!(md, "**Category:** {}\n", result.category).ok();

        writeln!(md, "## Skill Overview\n").ok();
        writeln!(md, "| Skill | Raw | Normalized | Band | |").ok();
        writeln!(md, "|-------|-----|------------|------|---|").ok();
        for (skill, value) in &result.skill_breakdown {
            let raw = if self.include_inputs {
                format!("{} {}", inputs.get(*skill), skill.unit())
            } else {
                "-".to_string()
            };
            writeln!(
                md,
                "| {} | {} | {:.1}% | {} | `{}` |",
                skill,
                raw,
                value,
                band_label(SkillBand::from_value(*value)),
                text_bar(*value, BAR_WIDTH)
            )
            .ok();
        }
        md.push('\n');

        writeln!(md, "## Suggestions to Improve\n").ok();
        if result.suggestions.is_empty() {
            writeln!(md, "{ALL_TARGETS_MET}").ok();
        } else {
            for suggestion in &result.suggestions {
                writeln!(md, "- {suggestion}").ok();
            }
        }

        writeln!(
            md,
            "\n---\n\n*Generated by {} v{}*",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
        .ok();

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::compute;

    #[test]
    fn test_markdown_sections() {
        let inputs = ScoreInputs::default();
        let result = compute(&inputs);
        let md = MarkdownReporter::new().generate(&inputs, &result).unwrap();
        assert!(md.contains("**Your Readiness Score:** 46.20"));
        assert!(md.contains("**Category:** Developing"));
        assert!(md.contains("| Communication | 3 /5 | 60.0% | fair |"));
        assert!(md.contains("- Focus on CGPA improvement to reach 7+"));
    }

    #[test]
    fn test_markdown_without_inputs() {
        let inputs = ScoreInputs::default();
        let result = compute(&inputs);
        let md = MarkdownReporter::new()
            .without_inputs()
            .generate(&inputs, &result)
            .unwrap();
        assert!(md.contains("| DSA | - | 50.0% | fair |"));
    }
}
