//! Raw learner inputs, the skill catalogue, and out-of-range input handling.

use crate::error::{ReadinessError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight self-reported skills, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "DSA")]
    Dsa,
    #[serde(rename = "Core CS")]
    CoreCs,
    Aptitude,
    #[serde(rename = "Mock Interview")]
    MockInterview,
    Communication,
    Projects,
    Internship,
    #[serde(rename = "CGPA")]
    Cgpa,
}

impl Skill {
    /// All skills in breakdown (and validation) order.
    pub const ALL: [Self; 8] = [
        Self::Dsa,
        Self::CoreCs,
        Self::Aptitude,
        Self::MockInterview,
        Self::Communication,
        Self::Projects,
        Self::Internship,
        Self::Cgpa,
    ];

    /// Display name, also used as the breakdown key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dsa => "DSA",
            Self::CoreCs => "Core CS",
            Self::Aptitude => "Aptitude",
            Self::MockInterview => "Mock Interview",
            Self::Communication => "Communication",
            Self::Projects => "Projects",
            Self::Internship => "Internship",
            Self::Cgpa => "CGPA",
        }
    }

    /// Documented input domain `(min, max)`, both inclusive.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        match self {
            Self::Dsa | Self::CoreCs | Self::Aptitude | Self::MockInterview => (0.0, 100.0),
            Self::Communication => (1.0, 5.0),
            Self::Projects => (0.0, 5.0),
            Self::Internship => (0.0, 6.0),
            Self::Cgpa => (0.0, 10.0),
        }
    }

    /// Rescale a raw input onto 0-100.
    ///
    /// The four test scores are already on that scale and pass through
    /// untouched. Communication divides by 5 even though its domain starts
    /// at 1, so a rating of 1 maps to 20.
    #[must_use]
    pub fn normalize(&self, raw: f64) -> f64 {
        match self {
            Self::Dsa | Self::CoreCs | Self::Aptitude | Self::MockInterview => raw,
            Self::Communication | Self::Projects => (raw / 5.0) * 100.0,
            Self::Internship => (raw / 6.0) * 100.0,
            Self::Cgpa => (raw / 10.0) * 100.0,
        }
    }

    /// Unit shown next to raw values in reports and the input form.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Dsa | Self::CoreCs | Self::Aptitude | Self::MockInterview => "/100",
            Self::Communication => "/5",
            Self::Projects => "projects",
            Self::Internship => "months",
            Self::Cgpa => "/10",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, caller-supplied scores for one learner.
///
/// The default values are the calculator form's starting point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoreInputs {
    /// DSA skill score (0-100)
    pub dsa: f64,
    /// Core CS fundamentals score (0-100)
    pub core_cs: f64,
    /// Aptitude test score (0-100)
    pub aptitude: f64,
    /// Mock interview score (0-100)
    pub mock_interview: f64,
    /// Self-rated communication (1-5)
    pub communication: f64,
    /// Number of strong projects (0-5)
    pub projects: f64,
    /// Internship duration in months (0-6)
    pub internship_months: f64,
    /// Grade point average (0-10)
    pub cgpa: f64,
}

impl Default for ScoreInputs {
    fn default() -> Self {
        Self {
            dsa: 50.0,
            core_cs: 60.0,
            aptitude: 50.0,
            mock_interview: 45.0,
            communication: 3.0,
            projects: 2.0,
            internship_months: 1.0,
            cgpa: 6.8,
        }
    }
}

impl ScoreInputs {
    /// Read the raw value for a skill.
    #[must_use]
    pub const fn get(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Dsa => self.dsa,
            Skill::CoreCs => self.core_cs,
            Skill::Aptitude => self.aptitude,
            Skill::MockInterview => self.mock_interview,
            Skill::Communication => self.communication,
            Skill::Projects => self.projects,
            Skill::Internship => self.internship_months,
            Skill::Cgpa => self.cgpa,
        }
    }

    /// Replace the raw value for a skill.
    pub fn set(&mut self, skill: Skill, value: f64) {
        let slot = match skill {
            Skill::Dsa => &mut self.dsa,
            Skill::CoreCs => &mut self.core_cs,
            Skill::Aptitude => &mut self.aptitude,
            Skill::MockInterview => &mut self.mock_interview,
            Skill::Communication => &mut self.communication,
            Skill::Projects => &mut self.projects,
            Skill::Internship => &mut self.internship_months,
            Skill::Cgpa => &mut self.cgpa,
        };
        *slot = value;
    }

    /// Builder-style variant of [`ScoreInputs::set`].
    #[must_use]
    pub fn with(mut self, skill: Skill, value: f64) -> Self {
        self.set(skill, value);
        self
    }

    /// Check every field against its domain, reporting the first violation
    /// in breakdown order.
    pub fn validate(&self) -> Result<()> {
        for skill in Skill::ALL {
            let value = self.get(skill);
            if !value.is_finite() {
                return Err(ReadinessError::NonFinite { skill });
            }
            let (min, max) = skill.domain();
            if value < min || value > max {
                return Err(ReadinessError::out_of_range(skill, value));
            }
        }
        Ok(())
    }

    /// Whether every field lies inside its domain.
    #[must_use]
    pub fn is_in_domain(&self) -> bool {
        self.validate().is_ok()
    }

    /// Copy with every field pulled into its domain. NaN becomes the minimum.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for skill in Skill::ALL {
            let value = self.get(skill);
            let (min, max) = skill.domain();
            let clamped = if value.is_nan() {
                min
            } else {
                value.clamp(min, max)
            };
            if clamped.to_bits() != value.to_bits() {
                tracing::warn!("Clamped {} from {} to {}", skill, value, clamped);
                out.set(skill, clamped);
            }
        }
        out
    }
}

/// How out-of-domain inputs are handled before scoring.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Refuse to score, naming the offending skill
    #[default]
    Reject,
    /// Pull each value to the nearest domain boundary
    Clamp,
}

impl InputPolicy {
    /// Produce the inputs that will actually be scored.
    pub fn apply(self, inputs: &ScoreInputs) -> Result<ScoreInputs> {
        match self {
            Self::Reject => inputs.validate().map(|()| *inputs),
            Self::Clamp => Ok(inputs.clamped()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Clamp => "clamp",
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
