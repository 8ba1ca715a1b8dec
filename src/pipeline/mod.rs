//! Pipeline orchestration for readiness scoring.
//!
//! Shared input → score → report plumbing used by the CLI command handlers.

mod output;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for scripted use
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Score fell below the requested minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
