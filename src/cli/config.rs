//! Config and schema command handlers.

use crate::config::{
    discover_config_file, generate_full_example_config, generate_json_schema, load_or_default,
    search_dirs, AppConfig, CONFIG_FILE_NAMES,
};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the effective configuration (defaults merged with the config file) as YAML.
///
/// Invalid values are shown after repair, which is what every other command uses.
pub fn run_config_show(explicit: Option<&Path>) -> Result<i32> {
    let (config, loaded_from) = load_or_default(explicit);
    if let Some(path) = &loaded_from {
        eprintln!("# Loaded from: {}", path.display());
    } else {
        eprintln!("# No config file found; showing defaults");
    }
    let (config, errors) = config.repaired();
    for error in &errors {
        eprintln!("# Replaced invalid value. {error}");
    }
    write_output(config_yaml(&config)?.trim_end(), &OutputTarget::Stdout, true)?;
    Ok(exit_codes::SUCCESS)
}

fn config_yaml(config: &AppConfig) -> Result<String> {
    serde_yaml::to_string(config).context("failed to serialize config")
}

/// Print the config search paths and the file that would be used.
pub fn run_config_path(explicit: Option<&Path>) -> Result<i32> {
    eprintln!("Config file search paths (in order):");
    for dir in search_dirs() {
        eprintln!("  {}", dir.display());
    }
    eprintln!();
    eprintln!("Recognized file names:");
    for name in CONFIG_FILE_NAMES {
        eprintln!("  {name}");
    }
    eprintln!();
    match discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(exit_codes::SUCCESS)
}

/// Write a commented example config into `dir`, refusing to overwrite.
pub fn init_config_in(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(".placement-readiness.yaml");
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_full_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}

/// Generate an example `.placement-readiness.yaml` in the current directory.
pub fn run_config_init() -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let target = init_config_in(&cwd)?;
    eprintln!("Created {}", target.display());
    Ok(exit_codes::SUCCESS)
}

/// Print or write the JSON Schema for the config file format.
pub fn run_schema(output: Option<&Path>) -> Result<i32> {
    let schema = generate_json_schema();
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => write_output(&schema, &OutputTarget::Stdout, true)?,
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;
    use crate::readiness::InputPolicy;

    #[test]
    fn test_init_writes_loadable_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = init_config_in(tmp.path()).unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.scoring.policy, InputPolicy::Reject);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        init_config_in(tmp.path()).unwrap();
        let err = init_config_in(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_config_yaml_round_trips() {
        let config = AppConfig::builder().policy(InputPolicy::Clamp).build();
        let yaml = config_yaml(&config).unwrap();
        let back: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.scoring.policy, InputPolicy::Clamp);
    }

    #[test]
    fn test_shown_config_has_repaired_tick_rate() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "tui:\n  tick_rate_ms: 0\n").unwrap();

        let (config, _) = load_or_default(Some(&path));
        let (config, errors) = config.repaired();
        assert_eq!(errors.len(), 1);
        let yaml = config_yaml(&config).unwrap();
        assert!(yaml.contains("tick_rate_ms: 10"), "{yaml}");
    }

    #[test]
    fn test_schema_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("schema.json");
        run_schema(Some(&path)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }
}
