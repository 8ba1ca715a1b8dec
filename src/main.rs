//! placement-readiness: placement readiness scoring tool
//!
//! Scores eight self-reported skills and opens an interactive dashboard.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use placement_readiness::{
    cli,
    config::{load_or_default, AppConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
    InputPolicy, ScoreInputs,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScored Skills:",
        "\n  DSA, Core CS, Aptitude, Mock Interview, Communication,",
        "\n  Projects, Internship, CGPA",
        "\n\nOutput Formats:",
        "\n  tui, summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "placement-readiness")]
#[command(version, long_version = build_long_version())]
#[command(about = "Placement readiness scoring and dashboard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score
    3  Error occurred

EXAMPLES:
    # Open the dashboard
    placement-readiness dashboard

    # Score from the command line
    placement-readiness score --dsa 80 --cgpa 8.2 -o summary

    # CI-style gate on a minimum score
    placement-readiness score --dsa 70 -o json --min-score 60")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to config file (default: auto-discover .placement-readiness.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one set of inputs and render the result
    Score(ScoreArgs),

    /// Open the interactive dashboard
    Dashboard,

    /// Inspect optional classifier artifacts
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
struct ScoreArgs {
    /// DSA skill score (0-100)
    #[arg(long, allow_negative_numbers = true)]
    dsa: Option<f64>,

    /// Core CS fundamentals score (0-100)
    #[arg(long, allow_negative_numbers = true)]
    core_cs: Option<f64>,

    /// Aptitude test score (0-100)
    #[arg(long, allow_negative_numbers = true)]
    aptitude: Option<f64>,

    /// Mock interview score (0-100)
    #[arg(long, allow_negative_numbers = true)]
    mock_interview: Option<f64>,

    /// Communication rating (1-5)
    #[arg(long, allow_negative_numbers = true)]
    communication: Option<f64>,

    /// Number of strong projects (0-5)
    #[arg(long, allow_negative_numbers = true)]
    projects: Option<f64>,

    /// Internship duration in months (0-6)
    #[arg(long, allow_negative_numbers = true)]
    internship_months: Option<f64>,

    /// Grade point average (0-10)
    #[arg(long, allow_negative_numbers = true)]
    cgpa: Option<f64>,

    /// How out-of-range values are handled
    #[arg(long, value_enum, env = "PLACEMENT_READINESS_POLICY")]
    policy: Option<InputPolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (default: stdout)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the score is below this threshold
    #[arg(long, allow_negative_numbers = true)]
    min_score: Option<f64>,
}

impl ScoreArgs {
    /// Overlay explicit flags on the configured defaults.
    fn inputs(&self, defaults: ScoreInputs) -> ScoreInputs {
        let mut inputs = defaults;
        let overrides = [
            (&mut inputs.dsa, self.dsa),
            (&mut inputs.core_cs, self.core_cs),
            (&mut inputs.aptitude, self.aptitude),
            (&mut inputs.mock_interview, self.mock_interview),
            (&mut inputs.communication, self.communication),
            (&mut inputs.projects, self.projects),
            (&mut inputs.internship_months, self.internship_months),
            (&mut inputs.cgpa, self.cgpa),
        ];
        for (slot, value) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }
        inputs
    }
}

/// Sub-subcommands for the `model` command
#[derive(Subcommand)]
enum ModelAction {
    /// Report whether rf_model.pkl and le_encoder.pkl are present
    Status {
        /// Directory to probe (default: configured artifact_dir)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .placement-readiness.yaml in the current directory
    Init,
}

fn main() {
    match run() {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "placement_readiness=debug"
    } else if quiet {
        "placement_readiness=error"
    } else {
        "placement_readiness=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn load_config(explicit: Option<&Path>) -> AppConfig {
    let (config, loaded_from) = load_or_default(explicit);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    let (config, errors) = config.repaired();
    for error in errors {
        tracing::warn!("Config: {}", error);
    }
    config
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = load_config(cli.config.as_deref());

    // Dispatch to command handlers
    match cli.command {
        Commands::Score(args) => {
            let score_config = cli::ScoreConfig {
                inputs: args.inputs(config.scoring.defaults),
                policy: args.policy.unwrap_or(config.scoring.policy),
                format: args.output.unwrap_or(config.output.format),
                output_file: args.output_file.or(config.output.file),
                no_color: cli.no_color || config.output.no_color,
                quiet: cli.quiet,
                min_score: args.min_score,
                tui: config.tui,
                model: config.model,
            };
            cli::run_score(score_config)
        }

        Commands::Dashboard => cli::run_dashboard(cli::DashboardConfig {
            defaults: config.scoring.defaults.clamped(),
            tui: config.tui,
            model: config.model,
        }),

        Commands::Model {
            action: ModelAction::Status { dir, json },
        } => {
            let dir = dir.unwrap_or(config.model.artifact_dir);
            cli::run_model_status(&dir, json)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref()),
            ConfigAction::Init => cli::run_config_init(),
        },

        Commands::Schema { output } => cli::run_schema(output.as_deref()),

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "placement-readiness",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }
    }
}
