//! Model status command handler.

use crate::artifacts::{ArtifactStatus, ModelArtifacts, MISSING_WARNING};
use crate::pipeline::exit_codes;
use anyhow::Result;
use std::path::Path;

/// Describe the classifier artifact status as text or JSON.
pub fn format_model_status(dir: &Path, status: &ArtifactStatus, json: bool) -> Result<String> {
    if json {
        let value = serde_json::json!({
            "artifact_dir": dir,
            "available": status.is_available(),
            "detail": status,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = format!("Artifact directory: {}\n", dir.display());
    match status {
        ArtifactStatus::Available => out.push_str("Status: available\n"),
        ArtifactStatus::Missing(paths) => {
            out.push_str("Status: missing\n");
            for path in paths {
                out.push_str(&format!("  - {}\n", path.display()));
            }
            out.push_str(MISSING_WARNING);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Report whether the optional classifier artifacts are present.
///
/// Missing artifacts are informational only; the exit code is always success.
pub fn run_model_status(dir: &Path, json: bool) -> Result<i32> {
    let status = ModelArtifacts::new(dir).probe();
    print!("{}", format_model_status(dir, &status, json)?);
    if json {
        println!();
    }
    Ok(exit_codes::SUCCESS)
}
