//! Configuration validation for placement-readiness.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, ModelConfig, OutputConfig, ScoringConfig, TuiConfig};
use crate::reports::ReportFormat;

/// Accepted range for `tui.tick_rate_ms`.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=5_000;

const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors.extend(self.model.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Form defaults must be scoreable regardless of the policy in force.
        match self.defaults.validate() {
            Ok(()) => Vec::new(),
            Err(e) => vec![ConfigError {
                field: "scoring.defaults".to_string(),
                message: e.to_string(),
            }],
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
            if self.format == ReportFormat::Tui {
                errors.push(ConfigError {
                    field: "output.format".to_string(),
                    message: "The tui format cannot be written to a file".to_string(),
                });
            }
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {} and {} ms, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}

impl Validatable for ModelConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // A missing directory is reported by the artifact probe, not here.
        if self.artifact_dir.as_os_str().is_empty() {
            vec![ConfigError {
                field: "model.artifact_dir".to_string(),
                message: "Artifact directory must not be empty".to_string(),
            }]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Repair
// ============================================================================

impl AppConfig {
    /// Validate and replace every invalid value with a usable one.
    ///
    /// Returns the repaired config together with the errors that were found,
    /// so callers can warn about them. Form defaults are clamped into their
    /// domains, an unknown theme or empty artifact directory falls back to the
    /// default, the tick rate is clamped into [`TICK_RATE_RANGE_MS`] and a
    /// `tui` format paired with an output file becomes `auto`. A missing output
    /// directory is left alone so the write fails with the real path.
    #[must_use]
    pub fn repaired(mut self) -> (Self, Vec<ConfigError>) {
        let errors = self.validate();
        if errors.is_empty() {
            return (self, errors);
        }

        self.scoring.defaults = self.scoring.defaults.clamped();

        if !VALID_THEMES.contains(&self.tui.theme.as_str()) {
            self.tui.theme = TuiConfig::default().theme;
        }
        self.tui.tick_rate_ms = self
            .tui
            .tick_rate_ms
            .clamp(*TICK_RATE_RANGE_MS.start(), *TICK_RATE_RANGE_MS.end());

        if self.output.file.is_some() && self.output.format == ReportFormat::Tui {
            self.output.format = ReportFormat::Auto;
        }

        if self.model.artifact_dir.as_os_str().is_empty() {
            self.model.artifact_dir = ModelConfig::default().artifact_dir;
        }

        (self, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::{ScoreInputs, Skill};
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid(), "{:?}", config.validate());
    }

    #[test]
    fn test_out_of_range_defaults_rejected() {
        let config = ScoringConfig {
            defaults: ScoreInputs::default().with(Skill::Communication, 0.0),
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.defaults");
        assert!(errors[0].message.contains("Communication"));
    }

    #[test]
    fn test_invalid_theme() {
        let config = TuiConfig {
            theme: "neon".to_string(),
            ..TuiConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
    }

    #[test]
    fn test_tick_rate_bounds() {
        let config = TuiConfig {
            tick_rate_ms: 0,
            ..TuiConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            format: ReportFormat::Json,
            no_color: false,
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");
    }

    #[test]
    fn test_tui_format_with_file_rejected() {
        let config = OutputConfig {
            file: Some(PathBuf::from("report.txt")),
            format: ReportFormat::Tui,
            no_color: false,
        };
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "output.format"));
    }

    #[test]
    fn test_empty_artifact_dir() {
        let config = ModelConfig {
            artifact_dir: PathBuf::new(),
            warn_if_missing: true,
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError {
            field: "tui.theme".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "tui.theme: bad");
    }

    #[test]
    fn test_repaired_valid_config_is_untouched() {
        let config = AppConfig::builder().policy(crate::readiness::InputPolicy::Clamp).build();
        let (repaired, errors) = config.repaired();
        assert!(errors.is_empty());
        assert_eq!(repaired.tui.tick_rate_ms, 250);
        assert_eq!(repaired.tui.theme, "dark");
    }

    #[test]
    fn test_repaired_clamps_tick_rate() {
        for (raw, expected) in [(0, 10), (9, 10), (60_000, 5_000)] {
            let mut config = AppConfig::default();
            config.tui.tick_rate_ms = raw;
            let (repaired, errors) = config.repaired();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "tui.tick_rate_ms");
            assert_eq!(repaired.tui.tick_rate_ms, expected);
            assert!(repaired.is_valid());
        }
    }

    #[test]
    fn test_repaired_fixes_every_section() {
        let mut config = AppConfig::default();
        config.scoring.defaults = ScoreInputs::default().with(Skill::Cgpa, 12.0);
        config.tui.theme = "neon".to_string();
        config.output.file = Some(PathBuf::from("report.txt"));
        config.output.format = ReportFormat::Tui;
        config.model.artifact_dir = PathBuf::new();

        let (repaired, errors) = config.repaired();
        assert_eq!(errors.len(), 4);
        assert!(repaired.is_valid(), "{:?}", repaired.validate());
        assert_eq!(repaired.scoring.defaults.cgpa, 10.0);
        assert_eq!(repaired.tui.theme, "dark");
        assert_eq!(repaired.output.format, ReportFormat::Auto);
        assert_eq!(repaired.model.artifact_dir, PathBuf::from("."));
    }
}
