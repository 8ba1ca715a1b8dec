//! **Placement readiness scoring for students preparing for campus placements.**
//!
//! `placement-readiness` turns eight self-reported measures (DSA, core CS,
//! aptitude and mock-interview scores, a communication rating, project count,
//! internship months and CGPA) into a single weighted readiness score, a
//! four-level category, a normalized per-skill breakdown, and a list of
//! concrete improvement suggestions.
//!
//! It powers both a command-line interface with an interactive terminal
//! dashboard and a small library for programmatic use.
//!
//! ## Core Concepts & Modules
//!
//! - **[`readiness`]**: The scorer. [`compute`] is a pure function from
//!   [`ScoreInputs`] to [`ReadinessResult`]; [`ReadinessScorer`] applies an
//!   [`InputPolicy`] to out-of-range inputs first.
//! - **[`reports`]**: Summary, JSON and Markdown renderings of a result.
//! - **[`tui`]**: The two-page dashboard (home and calculator).
//! - **[`config`]**: YAML configuration discovery, validation and schema.
//! - **[`artifacts`]**: Optional classifier artifact detection.
//!
//! ## Getting Started
//!
//! ```
//! use placement_readiness::{compute, Category, ScoreInputs};
//!
//! let inputs = ScoreInputs {
//!     dsa: 80.0,
//!     core_cs: 75.0,
//!     aptitude: 70.0,
//!     mock_interview: 65.0,
//!     communication: 4.0,
//!     projects: 3.0,
//!     internship_months: 5.0,
//!     cgpa: 8.2,
//! };
//!
//! let result = compute(&inputs);
//! assert_eq!(result.category, Category::PlacementReady);
//! assert!(result.suggestions.is_empty());
//! ```
//!
//! ### Rejecting or clamping bad input
//!
//! ```
//! use placement_readiness::{InputPolicy, ReadinessScorer, ScoreInputs, Skill};
//!
//! let inputs = ScoreInputs::default().with(Skill::Dsa, 140.0);
//!
//! assert!(ReadinessScorer::new(InputPolicy::Reject).score(&inputs).is_err());
//! let clamped = ReadinessScorer::new(InputPolicy::Clamp).score(&inputs).unwrap();
//! assert_eq!(clamped.normalized(Skill::Dsa), 100.0);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: f64↔u16/usize casts are pervasive in TUI layout math
    // and are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // Variable names like `min`/`max` are clear in context
    clippy::similar_names
)]

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod readiness;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use artifacts::{ArtifactStatus, ModelArtifacts};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TuiConfig, Validatable};
pub use error::{ReadinessError, Result};
pub use readiness::{
    compute, Category, InputPolicy, ReadinessResult, ReadinessScorer, ScoreInputs, Skill,
    SkillBand, Suggestion,
};
pub use reports::{ReportFormat, ReportGenerator};
