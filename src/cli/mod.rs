//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod config;
mod dashboard;
mod model;
mod score;

pub use config::{run_config_init, run_config_path, run_config_show, run_schema};
pub use dashboard::{run_dashboard, DashboardConfig};
pub use model::run_model_status;
pub use score::{render_report, run_score, ScoreConfig};
