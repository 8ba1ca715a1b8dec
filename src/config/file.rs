//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".placement-readiness.yaml",
    ".placement-readiness.yml",
    "placement-readiness.yaml",
    "placement-readiness.yml",
];

/// Directory name under the user config directory.
pub const CONFIG_DIR_NAME: &str = "placement-readiness";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/placement-readiness/)
/// 4. Home directory
///
/// A missing explicit path is logged and the search continues with the
/// standard locations.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(
            "Config file {} not found, searching default locations",
            path.display()
        );
    }

    search_dirs()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Directories searched after an explicit path, in order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Placement Readiness Configuration File
# =======================================
#
# Place it at:
#   - .placement-readiness.yaml in your working directory
#   - ~/.config/placement-readiness/placement-readiness.yaml for global config
#
# CLI arguments always override file settings.

# Scoring configuration
scoring:
  # Out-of-range inputs: reject (error) or clamp (pull to the boundary)
  policy: reject
  # Starting values for the calculator form and the score command
  defaults:
    dsa: 50.0              # 0-100
    core_cs: 60.0          # 0-100
    aptitude: 50.0         # 0-100
    mock_interview: 45.0   # 0-100
    communication: 3.0     # 1-5
    projects: 2.0          # 0-5
    internship_months: 1.0 # 0-6
    cgpa: 6.8              # 0-10

# Output configuration
output:
  # Format: auto, tui, summary, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: readiness.json
  # Disable colored output
  no_color: false

# Dashboard configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  tick_rate_ms: 250

# Optional classifier artifacts (rf_model.pkl, le_encoder.pkl)
model:
  artifact_dir: .
  warn_if_missing: true
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
