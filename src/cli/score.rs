//! Score command handler.
//!
//! Implements the `score` subcommand: score one set of inputs and render it.

use crate::artifacts::ModelArtifacts;
use crate::config::{ModelConfig, TuiConfig};
use crate::pipeline::{auto_detect_format, exit_codes, should_use_color, write_output, OutputTarget};
use crate::readiness::{InputPolicy, ReadinessResult, ReadinessScorer, ScoreInputs};
use crate::reports::{create_reporter, ReportFormat};
use crate::tui::{run_tui, App};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Score command configuration
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub inputs: ScoreInputs,
    pub policy: InputPolicy,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
    pub min_score: Option<f64>,
    pub tui: TuiConfig,
    pub model: ModelConfig,
}

impl ScoreConfig {
    /// Non-interactive defaults for the given inputs.
    #[must_use]
    pub fn new(inputs: ScoreInputs) -> Self {
        Self {
            inputs,
            policy: InputPolicy::default(),
            format: ReportFormat::Summary,
            output_file: None,
            no_color: false,
            quiet: false,
            min_score: None,
            tui: TuiConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let (accepted, result) = ReadinessScorer::new(config.policy)
        .score_accepted(&config.inputs)
        .context("Invalid score inputs")?;

    tracing::info!(
        "Readiness score {:.2} ({}) using {} policy",
        result.score,
        result.category,
        config.policy
    );

    let output_target = OutputTarget::from_option(config.output_file.clone());
    let effective_output = auto_detect_format(config.format, &output_target);

    if effective_output == ReportFormat::Tui {
        let mut app = App::new(accepted).calculated();
        if config.model.warn_if_missing {
            let status = ModelArtifacts::new(&config.model.artifact_dir).probe();
            app = app.with_artifact_status(&status);
        }
        run_tui(&mut app, &config.tui.theme, config.tui.tick_rate_ms)
            .context("Dashboard terminated with an error")?;
    } else {
        let colored =
            should_use_color(config.no_color) && matches!(output_target, OutputTarget::Stdout);
        let report = render_report(effective_output, &accepted, &result, colored)?;
        write_output(&report, &output_target, config.quiet)?;
    }

    if let Some(threshold) = config.min_score {
        if result.score < threshold {
            tracing::error!(
                "Readiness score {:.2} is below minimum threshold {:.2}",
                result.score,
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Render a result in a non-interactive format.
pub fn render_report(
    format: ReportFormat,
    inputs: &ScoreInputs,
    result: &ReadinessResult,
    colored: bool,
) -> Result<String> {
    let reporter = create_reporter(format, colored)?;
    let report = reporter
        .generate(inputs, result)
        .with_context(|| format!("Failed to render {format} report"))?;
    Ok(report)
}
