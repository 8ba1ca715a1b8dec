//! Unified error types for placement-readiness.
//!
//! Scoring itself is total over the documented input domain; these errors
//! cover the boundary around it (input policy, configuration, IO, reports).

use crate::readiness::Skill;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for placement-readiness operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadinessError {
    /// A raw input lies outside its documented domain
    #[error("{skill} value {value} is out of range (expected {min}-{max})")]
    InputOutOfRange {
        skill: Skill,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A raw input is NaN or infinite
    #[error("{skill} value is not a finite number")]
    NonFinite { skill: Skill },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report generation errors
    #[error("Report generation failed: {0}")]
    Report(String),
}

/// Convenient Result type for placement-readiness operations
pub type Result<T> = std::result::Result<T, ReadinessError>;

impl ReadinessError {
    /// Create an out-of-range error for a skill input
    pub fn out_of_range(skill: Skill, value: f64) -> Self {
        let (min, max) = skill.domain();
        Self::InputOutOfRange {
            skill,
            value,
            min,
            max,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }

    /// The skill an input error refers to, if any
    #[must_use]
    pub const fn skill(&self) -> Option<Skill> {
        match self {
            Self::InputOutOfRange { skill, .. } | Self::NonFinite { skill } => Some(*skill),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadinessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ReadinessError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(format!("JSON serialization: {err}"))
    }
}
