//! Placement readiness scoring.
//!
//! Maps eight self-reported skill inputs onto a single weighted score in
//! 0-100, a four-level category, ordered improvement suggestions and a
//! normalized per-skill breakdown.
//!
//! # Usage
//!
//! ```
//! use placement_readiness::readiness::{compute, Category, ScoreInputs, Skill};
//!
//! let inputs = ScoreInputs::default().with(Skill::Dsa, 50.0);
//! let result = compute(&inputs);
//!
//! assert_eq!(result.category, Category::Developing);
//! for suggestion in &result.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```
//!
//! [`compute`] never validates. Out-of-domain inputs are handled by
//! [`ReadinessScorer`] according to its [`InputPolicy`].

mod inputs;
mod scorer;

pub use inputs::{InputPolicy, ScoreInputs, Skill};
pub use scorer::{
    compute, weight_of, Category, ReadinessResult, ReadinessScorer, SkillBand, Suggestion,
    ALMOST_READY_THRESHOLD, APTITUDE_TARGET, CGPA_TARGET, COMMUNICATION_TARGET, CORE_CS_TARGET,
    DEVELOPING_THRESHOLD, DSA_TARGET, INTERNSHIP_TARGET, MOCK_INTERVIEW_TARGET,
    PLACEMENT_READY_THRESHOLD, PROJECTS_TARGET, WEIGHTS,
};
