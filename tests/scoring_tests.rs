//! Integration tests for placement-readiness
//!
//! These tests exercise the public scoring API end to end, from raw inputs
//! through the input policy to rendered reports.

use placement_readiness::{
    compute,
    reports::{create_reporter, ReportFormat},
    Category, InputPolicy, ReadinessError, ReadinessScorer, ScoreInputs, Skill,
};

// ============================================================================
// Fixtures
// ============================================================================

fn starting_form() -> ScoreInputs {
    ScoreInputs {
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

fn minimal() -> ScoreInputs {
    ScoreInputs {
        dsa: 0.0,
        core_cs: 0.0,
        aptitude: 0.0,
        mock_interview: 0.0,
        communication: 1.0,
        projects: 0.0,
        internship_months: 0.0,
        cgpa: 0.0,
    }
}

// ============================================================================
// Scoring
// ============================================================================

mod scoring {
    use super::*;

    #[test]
    fn test_starting_form_scores_developing() {
        let result = compute(&starting_form());
        assert!((result.score - 46.2).abs() < 1e-9, "got {}", result.score);
        assert_eq!(result.category, Category::Developing);

        assert!((result.normalized(Skill::Communication) - 60.0).abs() < 1e-9);
        assert!((result.normalized(Skill::Projects) - 40.0).abs() < 1e-9);
        assert!((result.normalized(Skill::Internship) - 100.0 / 6.0).abs() < 1e-9);
        assert!((result.normalized(Skill::Cgpa) - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_starting_form_suggestions_in_order() {
        let result = compute(&starting_form());
        assert_eq!(
            result.suggestion_texts(),
            vec![
                "Improve DSA by 20.0 points",
                "Improve Core CS by 5.0 points",
                "Improve Aptitude by 10.0 points",
                "Practice Mock Interviews to reach 60+",
                "Work on 1 strong projects",
                "Gain at least 1 months internship",
                "Focus on CGPA improvement to reach 7+",
            ]
        );
    }

    #[test]
    fn test_maximal_inputs() {
        let result = compute(&maximal());
        assert!((result.score - 100.0).abs() < 1e-9);
        assert_eq!(result.category, Category::PlacementReady);
        assert!(result.meets_all_targets());
    }

    #[test]
    fn test_minimal_inputs_are_beginner() {
        let result = compute(&minimal());
        // Communication cannot go below 1, which still contributes 0.09 * 20
        assert!((result.score - 1.8).abs() < 1e-9);
        assert_eq!(result.category, Category::Beginner);
        assert_eq!(result.suggestions.len(), 8);
        assert_eq!(
            result.suggestions.last().map(|s| s.skill),
            Some(Skill::Communication)
        );
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let result = compute(&starting_form());
        let keys: Vec<&str> = result.skill_breakdown.keys().map(Skill::name).collect();
        assert_eq!(
            keys,
            vec![
                "DSA",
                "Core CS",
                "Aptitude",
                "Mock Interview",
                "Communication",
                "Projects",
                "Internship",
                "CGPA"
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly on every target: nothing to suggest
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
    fn test_category_boundaries() {
        let cases = [
            (39.99, Category::Beginner),
            (40.0, Category::Developing),
            (59.99, Category::Developing),
            (60.0, Category::AlmostReady),
            (69.99, Category::AlmostReady),
            (70.0, Category::PlacementReady),
        ];
        for (score, expected) in cases {
            assert_eq!(Category::from_score(score), expected, "score {score}");
        }
    }
}

// ============================================================================
// Input policy
// ============================================================================

mod policy {
    use super::*;

    #[test]
    fn test_reject_names_first_offender() {
        let inputs = starting_form()
            .with(Skill::Aptitude, -5.0)
            .with(Skill::Cgpa, 12.0);
        let err = ReadinessScorer::new(InputPolicy::Reject)
            .score(&inputs)
            .unwrap_err();
        assert_eq!(err.skill(), Some(Skill::Aptitude));
    }

    #[test]
    fn test_reject_non_finite() {
        let inputs = starting_form().with(Skill::Dsa, f64::NAN);
        let err = ReadinessScorer::default().score(&inputs).unwrap_err();
        assert!(matches!(err, ReadinessError::NonFinite { skill: Skill::Dsa }));
    }

    #[test]
    fn test_clamp_matches_boundary_values() {
        let wild = ScoreInputs {
            dsa: 250.0,
            core_cs: 140.0,
            aptitude: 101.0,
            mock_interview: 1000.0,
            communication: 9.0,
            projects: 12.0,
            internship_months: 24.0,
            cgpa: 11.0,
        };
        let clamped = ReadinessScorer::new(InputPolicy::Clamp)
            .score(&wild)
            .unwrap();
        assert_eq!(clamped, compute(&maximal()));
    }

    #[test]
    fn test_clamp_leaves_valid_inputs_alone() {
        let scored = ReadinessScorer::new(InputPolicy::Clamp)
            .score(&starting_form())
            .unwrap();
        assert_eq!(scored, compute(&starting_form()));
    }
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    #[test]
    fn test_every_static_format_renders() {
        let inputs = starting_form();
        let result = compute(&inputs);
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            let reporter = create_reporter(format, false).unwrap();
            assert_eq!(reporter.format(), format);
            let text = reporter.generate(&inputs, &result).unwrap();
            assert!(!text.trim().is_empty(), "{format} report is empty");
            if format != ReportFormat::Json {
                assert!(text.contains("46.20"), "{format} report lacks the score");
            }
        }
    }

    #[test]
    fn test_json_report_matches_result() {
        let inputs = maximal();
        let result = compute(&inputs);
        let text = create_reporter(ReportFormat::Json, false)
            .unwrap()
            .generate(&inputs, &result)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["result"]["category"], "PlacementReady");
        assert_eq!(value["result"]["suggestions"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["result"]["skill_breakdown"]["CGPA"], 100.0);
    }

    #[test]
    fn test_summary_celebrates_all_targets() {
        let inputs = maximal();
        let result = compute(&inputs);
        let text = create_reporter(ReportFormat::Summary, false)
            .unwrap()
            .generate(&inputs, &result)
            .unwrap();
        assert!(text.contains("Great job! You are Placement Ready!"));
    }
}
