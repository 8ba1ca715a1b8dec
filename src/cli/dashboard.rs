//! Dashboard command handler.

use crate::artifacts::ModelArtifacts;
use crate::config::{ModelConfig, TuiConfig};
use crate::pipeline::exit_codes;
use crate::readiness::ScoreInputs;
use crate::tui::{run_tui, App};
use anyhow::{Context, Result};

/// Dashboard command configuration
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Starting values for the calculator form
    pub defaults: ScoreInputs,
    pub tui: TuiConfig,
    pub model: ModelConfig,
}

/// Build the dashboard state without entering the terminal.
#[must_use]
pub fn prepare_app(config: &DashboardConfig) -> App {
    let app = App::new(config.defaults);
    if config.model.warn_if_missing {
        let status = ModelArtifacts::new(&config.model.artifact_dir).probe();
        app.with_artifact_status(&status)
    } else {
        app
    }
}

/// Open the interactive dashboard on the home page.
pub fn run_dashboard(config: DashboardConfig) -> Result<i32> {
    let mut app = prepare_app(&config);
    tracing::debug!("Starting dashboard with theme {}", config.tui.theme);
    run_tui(&mut app, &config.tui.theme, config.tui.tick_rate_ms)
        .context("Dashboard terminated with an error")?;
    Ok(exit_codes::SUCCESS)
}
