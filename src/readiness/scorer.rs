//! Readiness scorer.
//!
//! Combines the eight normalized skills into a weighted composite, buckets
//! it into a category, and emits fixed-template improvement suggestions.

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::inputs::{InputPolicy, ScoreInputs, Skill};

// Suggestion thresholds, compared against raw (unscaled) inputs.
pub const DSA_TARGET: f64 = 70.0;
pub const CORE_CS_TARGET: f64 = 65.0;
pub const APTITUDE_TARGET: f64 = 60.0;
pub const MOCK_INTERVIEW_TARGET: f64 = 60.0;
pub const PROJECTS_TARGET: f64 = 3.0;
pub const INTERNSHIP_TARGET: f64 = 2.0;
pub const CGPA_TARGET: f64 = 7.0;
pub const COMMUNICATION_TARGET: f64 = 3.0;

// Category lower bounds (inclusive).
pub const DEVELOPING_THRESHOLD: f64 = 40.0;
pub const ALMOST_READY_THRESHOLD: f64 = 60.0;
pub const PLACEMENT_READY_THRESHOLD: f64 = 70.0;

/// Composite weights in summation order. They sum to 1.0.
pub const WEIGHTS: [(Skill, f64); 8] = [
    (Skill::Dsa, 0.20),
    (Skill::CoreCs, 0.15),
    (Skill::Projects, 0.15),
    (Skill::Internship, 0.15),
    (Skill::MockInterview, 0.12),
    (Skill::Aptitude, 0.09),
    (Skill::Communication, 0.09),
    (Skill::Cgpa, 0.05),
];

/// Weight applied to a skill in the composite.
#[must_use]
pub fn weight_of(skill: Skill) -> f64 {
    WEIGHTS
        .iter()
        .find(|(s, _)| *s == skill)
        .map_or(0.0, |(_, w)| *w)
}

/// Readiness category derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Below 40
    Beginner,
    /// 40 to below 60
    Developing,
    /// 60 to below 70
    AlmostReady,
    /// 70 and above
    PlacementReady,
}

impl Category {
    /// Bucket a composite score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < DEVELOPING_THRESHOLD {
            Self::Beginner
        } else if score < ALMOST_READY_THRESHOLD {
            Self::Developing
        } else if score < PLACEMENT_READY_THRESHOLD {
            Self::AlmostReady
        } else {
            Self::PlacementReady
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Developing => "Developing",
            Self::AlmostReady => "Almost Ready",
            Self::PlacementReady => "Placement Ready",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation band for a normalized skill value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillBand {
    /// Below 50
    Weak,
    /// 50 to below 70
    Fair,
    /// 70 and above
    Strong,
}

impl SkillBand {
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value < 50.0 {
            Self::Weak
        } else if value < 70.0 {
            Self::Fair
        } else {
            Self::Strong
        }
    }
}

/// One improvement hint, tagged with the skill that triggered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub skill: Skill,
    pub message: String,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of scoring one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ReadinessResult {
    /// Weighted composite (0-100)
    pub score: f64,
    /// Category bucket of `score`
    pub category: Category,
    /// Hints in fixed evaluation order
    pub suggestions: Vec<Suggestion>,
    /// Normalized (0-100) value per skill, in breakdown order
    pub skill_breakdown: IndexMap<Skill, f64>,
}

impl ReadinessResult {
    /// Plain suggestion strings, in order.
    #[must_use]
    pub fn suggestion_texts(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.message.as_str()).collect()
    }

    /// True when no threshold is missed.
    #[must_use]
    pub fn meets_all_targets(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Normalized value for one skill.
    #[must_use]
    pub fn normalized(&self, skill: Skill) -> f64 {
        self.skill_breakdown.get(&skill).copied().unwrap_or(0.0)
    }
}

/// Score a set of raw inputs.
///
/// Total over the documented domain; performs no validation. Use
/// [`ReadinessScorer`] to apply an [`InputPolicy`] first.
pub fn compute(inputs: &ScoreInputs) -> ReadinessResult {
    let skill_breakdown: IndexMap<Skill, f64> = Skill::ALL
        .into_iter()
        .map(|skill| (skill, skill.normalize(inputs.get(skill))))
        .collect();

    let score: f64 = WEIGHTS
        .iter()
        .map(|(skill, weight)| weight * skill_breakdown[skill])
        .sum();

    ReadinessResult {
        score,
        category: Category::from_score(score),
        suggestions: suggestions_for(inputs),
        skill_breakdown,
    }
}

fn suggestions_for(inputs: &ScoreInputs) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let mut push = |skill: Skill, message: String| suggestions.push(Suggestion { skill, message });

    if inputs.dsa < DSA_TARGET {
        push(
            Skill::Dsa,
            format!("Improve DSA by {:.1} points", (DSA_TARGET - inputs.dsa).max(0.0)),
        );
    }
    if inputs.core_cs < CORE_CS_TARGET {
        push(
            Skill::CoreCs,
            format!(
                "Improve Core CS by {:.1} points",
                (CORE_CS_TARGET - inputs.core_cs).max(0.0)
            ),
        );
    }
    if inputs.aptitude < APTITUDE_TARGET {
        push(
            Skill::Aptitude,
            format!(
                "Improve Aptitude by {:.1} points",
                (APTITUDE_TARGET - inputs.aptitude).max(0.0)
            ),
        );
    }
    if inputs.mock_interview < MOCK_INTERVIEW_TARGET {
        push(
            Skill::MockInterview,
            "Practice Mock Interviews to reach 60+".to_string(),
        );
    }
    if inputs.projects < PROJECTS_TARGET {
        push(
            Skill::Projects,
            format!(
                "Work on {:.0} strong projects",
                (PROJECTS_TARGET - inputs.projects).max(0.0)
            ),
        );
    }
    if inputs.internship_months < INTERNSHIP_TARGET {
        push(
            Skill::Internship,
            format!(
                "Gain at least {:.0} months internship",
                (INTERNSHIP_TARGET - inputs.internship_months).max(0.0)
            ),
        );
    }
    if inputs.cgpa < CGPA_TARGET {
        push(
            Skill::Cgpa,
            "Focus on CGPA improvement to reach 7+".to_string(),
        );
    }
    if inputs.communication < COMMUNICATION_TARGET {
        push(
            Skill::Communication,
            "Improve communication skills".to_string(),
        );
    }

    suggestions
}

/// Readiness scorer with an input policy
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessScorer {
    policy: InputPolicy,
}

impl ReadinessScorer {
    /// Create a scorer with the given out-of-range policy
    #[must_use]
    pub const fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Apply the policy, then score.
    pub fn score(&self, inputs: &ScoreInputs) -> Result<ReadinessResult> {
        self.score_accepted(inputs).map(|(_, result)| result)
    }

    /// Apply the policy once and return the accepted inputs with their result.
    ///
    /// Reports show the accepted values, so callers that render them use this
    /// instead of calling [`InputPolicy::apply`] and [`Self::score`] separately.
    pub fn score_accepted(&self, inputs: &ScoreInputs) -> Result<(ScoreInputs, ReadinessResult)> {
        let accepted = self.policy.apply(inputs)?;
        let result = compute(&accepted);
        tracing::debug!(
            "Scored {:.2} ({}) with {} suggestion(s)",
            result.score,
            result.category,
            result.suggestions.len()
        );
        Ok((accepted, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maximal() -> ScoreInputs {
        ScoreInputs {
            dsa: 100.0,
            core_cs: 100.0,
            aptitude: 100.0,
            mock_interview: 100.0,
            communication: 5.0,
            projects: 5.0,
            internship_months: 6.0,
            cgpa: 10.0,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-12, "weights sum to {sum}");
    }

    #[test]
    fn test_every_skill_weighted_once() {
        for skill in Skill::ALL {
            let count = WEIGHTS.iter().filter(|(s, _)| *s == skill).count();
            assert_eq!(count, 1, "{skill}");
        }
        assert_eq!(weight_of(Skill::Dsa), 0.20);
        assert_eq!(weight_of(Skill::Cgpa), 0.05);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(Category::from_score(0.0), Category::Beginner);
        assert_eq!(Category::from_score(39.99), Category::Beginner);
        assert_eq!(Category::from_score(40.0), Category::Developing);
        assert_eq!(Category::from_score(59.99), Category::Developing);
        assert_eq!(Category::from_score(60.0), Category::AlmostReady);
        assert_eq!(Category::from_score(69.99), Category::AlmostReady);
        assert_eq!(Category::from_score(70.0), Category::PlacementReady);
        assert_eq!(Category::from_score(100.0), Category::PlacementReady);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::AlmostReady.to_string(), "Almost Ready");
        assert_eq!(Category::PlacementReady.label(), "Placement Ready");
    }

    #[test]
    fn test_worked_example() {
        let result = compute(&ScoreInputs::default());
        assert!((result.score - 46.2).abs() < 1e-9, "score {}", result.score);
        assert_eq!(result.category, Category::Developing);
        assert_eq!(
            result.suggestion_texts(),
            vec![
                "Improve DSA by 20.0 points",
                "Improve Core CS by 5.0 points",
                "Practice Mock Interviews to reach 60+",
                "Work on 1 strong projects",
                "Gain at least 1 months internship",
                "Focus on CGPA improvement to reach 7+",
            ]
        );
        assert!((result.normalized(Skill::Internship) - 100.0 / 6.0).abs() < 1e-9);
        assert!((result.normalized(Skill::Cgpa) - 68.0).abs() < 1e-9);
        assert_eq!(result.normalized(Skill::Communication), 60.0);
        assert_eq!(result.normalized(Skill::Projects), 40.0);
    }

    #[test]
    fn test_maximal_inputs() {
        let result = compute(&maximal());
        assert_eq!(result.score, 100.0);
        assert_eq!(result.category, Category::PlacementReady);
        assert!(result.meets_all_targets());
        assert!(result.skill_breakdown.values().all(|v| *v == 100.0));
    }

    #[test]
    fn test_breakdown_order() {
        let result = compute(&ScoreInputs::default());
        let keys: Vec<Skill> = result.skill_breakdown.keys().copied().collect();
        assert_eq!(keys, Skill::ALL.to_vec());
    }

    #[test]
    fn test_suggestion_order_puts_communication_last() {
        let inputs = ScoreInputs {
            dsa: 0.0,
            core_cs: 0.0,
            aptitude: 0.0,
            mock_interview: 0.0,
            communication: 1.0,
            projects: 0.0,
            internship_months: 0.0,
            cgpa: 0.0,
        };
        let result = compute(&inputs);
        let skills: Vec<Skill> = result.suggestions.iter().map(|s| s.skill).collect();
        assert_eq!(
            skills,
            vec![
                Skill::Dsa,
                Skill::CoreCs,
                Skill::Aptitude,
                Skill::MockInterview,
                Skill::Projects,
                Skill::Internship,
                Skill::Cgpa,
                Skill::Communication,
            ]
        );
        assert_eq!(result.suggestions[0].message, "Improve DSA by 70.0 points");
        assert_eq!(result.suggestions[4].message, "Work on 3 strong projects");
        assert_eq!(
            result.suggestions[5].message,
            "Gain at least 2 months internship"
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let inputs = ScoreInputs {
            dsa: 70.0,
            core_cs: 65.0,
            aptitude: 60.0,
            mock_interview: 60.0,
            communication: 3.0,
            projects: 3.0,
            internship_months: 2.0,
            cgpa: 7.0,
        };
        assert!(compute(&inputs).suggestions.is_empty());
    }

    #[test]
    fn test_fractional_gap_formatting() {
        let inputs = ScoreInputs::default().with(Skill::Aptitude, 42.5);
        let result = compute(&inputs);
        assert!(result
            .suggestion_texts()
            .contains(&"Improve Aptitude by 17.5 points"));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let inputs = ScoreInputs::default().with(Skill::Cgpa, 8.3);
        let a = compute(&inputs);
        let b = compute(&inputs);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_skill_band() {
        assert_eq!(SkillBand::from_value(49.9), SkillBand::Weak);
        assert_eq!(SkillBand::from_value(50.0), SkillBand::Fair);
        assert_eq!(SkillBand::from_value(69.9), SkillBand::Fair);
        assert_eq!(SkillBand::from_value(70.0), SkillBand::Strong);
    }

    #[test]
    fn test_scorer_reject_policy() {
        let scorer = ReadinessScorer::default();
        assert_eq!(scorer.policy(), InputPolicy::Reject);
        let bad = ScoreInputs::default().with(Skill::Dsa, 120.0);
        assert!(scorer.score(&bad).is_err());
    }

    #[test]
    fn test_scorer_clamp_policy_matches_clamped_compute() {
        let scorer = ReadinessScorer::new(InputPolicy::Clamp);
        let bad = ScoreInputs::default()
            .with(Skill::Dsa, 120.0)
            .with(Skill::Projects, 8.0);
        let result = scorer.score(&bad).unwrap();
        assert_eq!(result, compute(&bad.clamped()));
        assert!(result.score <= 100.0);
    }

    #[test]
    fn test_score_accepted_returns_clamped_inputs() {
        let scorer = ReadinessScorer::new(InputPolicy::Clamp);
        let bad = ScoreInputs::default()
            .with(Skill::Cgpa, 11.0)
            .with(Skill::Dsa, -5.0);
        let (accepted, result) = scorer.score_accepted(&bad).unwrap();
        assert_eq!(accepted, bad.clamped());
        assert_eq!(accepted.dsa, 0.0);
        assert_eq!(result, compute(&accepted));
        assert_eq!(scorer.score(&bad).unwrap(), result);
    }

    #[test]
    fn test_score_accepted_rejects_without_result() {
        let bad = ScoreInputs::default().with(Skill::Cgpa, 11.0);
        let err = ReadinessScorer::default().score_accepted(&bad).unwrap_err();
        assert_eq!(err.skill(), Some(Skill::Cgpa));
    }
}
