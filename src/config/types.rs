//! Configuration types for placement-readiness.

use crate::readiness::{InputPolicy, ScoreInputs};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration loaded from a config file, with CLI
/// arguments layered on top by the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring configuration (input policy, form defaults)
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Dashboard configuration
    pub tui: TuiConfig,
    /// Optional classifier artifacts
    pub model: ModelConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the out-of-range input policy.
    pub const fn policy(mut self, policy: InputPolicy) -> Self {
        self.config.scoring.policy = policy;
        self
    }

    /// Set the calculator's starting values.
    pub const fn defaults(mut self, defaults: ScoreInputs) -> Self {
        self.config.scoring.defaults = defaults;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the dashboard theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Set the directory probed for classifier artifacts.
    pub fn artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.model.artifact_dir = dir.into();
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Scoring Configuration
// ============================================================================

/// Scoring configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// How out-of-range inputs are handled: reject or clamp
    pub policy: InputPolicy,
    /// Starting values for the calculator form and `score` flags
    pub defaults: ScoreInputs,
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// Dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast".
    /// Saved preferences take precedence once the theme is toggled.
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: 250,
        }
    }
}

/// Dashboard preferences persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("placement-readiness").join("preferences.json"))
    }

    /// Load preferences from disk, if a preferences file exists.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path().and_then(|p| Self::load_from(&p))
    }

    /// Load preferences from a specific file.
    #[must_use]
    pub fn load_from(path: &std::path::Path) -> Option<Self> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save preferences to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

// ============================================================================
// Model Artifact Configuration
// ============================================================================

/// Optional classifier artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory holding `rf_model.pkl` and `le_encoder.pkl`
    pub artifact_dir: PathBuf,
    /// Warn on startup when the artifacts are missing
    pub warn_if_missing: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("."),
            warn_if_missing: true,
        }
    }
}
