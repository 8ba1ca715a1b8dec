//! Configuration module for placement-readiness.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Persisted dashboard preferences
//!
//! # Configuration File
//!
//! Place a `.placement-readiness.yaml` file in your working directory or
//! `~/.config/placement-readiness/`:
//!
//! ```yaml
//! scoring:
//!   policy: clamp
//!   defaults:
//!     dsa: 65
//! tui:
//!   theme: light
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, ModelConfig, OutputConfig, ScoringConfig, TuiConfig,
    TuiPreferences,
};
pub use validation::{ConfigError, Validatable, TICK_RATE_RANGE_MS};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    search_dirs, ConfigFileError, CONFIG_DIR_NAME, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.placement-readiness.yaml` files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
