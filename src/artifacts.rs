//! Optional classifier artifacts.
//!
//! A separately trained course classifier may leave two pickled files next
//! to the tool. Nothing reads them: scoring is fully determined by the
//! readiness formula. This module only reports whether they are present so
//! the CLI and dashboard can warn when they are not.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Serialized classifier file name.
pub const MODEL_FILE: &str = "rf_model.pkl";
/// Serialized label encoder file name.
pub const ENCODER_FILE: &str = "le_encoder.pkl";

/// Warning shown when the artifacts are absent.
pub const MISSING_WARNING: &str = "Model files not found. CSV recommendations won't work.";

/// Presence of the classifier artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "missing", rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// Both files exist
    Available,
    /// One or both files are absent
    Missing(Vec<PathBuf>),
}

impl ArtifactStatus {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability probe for the classifier artifacts.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    dir: PathBuf,
}

impl ModelArtifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths the probe looks for.
    #[must_use]
    pub fn expected_paths(&self) -> [PathBuf; 2] {
        [self.dir.join(MODEL_FILE), self.dir.join(ENCODER_FILE)]
    }

    /// Check which artifacts exist. Files are never opened.
    #[must_use]
    pub fn probe(&self) -> ArtifactStatus {
        let missing: Vec<PathBuf> = self
            .expected_paths()
            .into_iter()
            .filter(|p| !p.is_file())
            .collect();

        if missing.is_empty() {
            tracing::debug!("Model artifacts found in {}", self.dir.display());
            ArtifactStatus::Available
        } else {
            tracing::warn!("{}", MISSING_WARNING);
            ArtifactStatus::Missing(missing)
        }
    }
}

impl Default for ModelArtifacts {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_in_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let status = ModelArtifacts::new(dir.path()).probe();
        match status {
            ArtifactStatus::Missing(paths) => {
                assert_eq!(paths.len(), 2);
                assert!(paths[0].ends_with(MODEL_FILE));
                assert!(paths[1].ends_with(ENCODER_FILE));
            }
            ArtifactStatus::Available => panic!("expected missing artifacts"),
        }
    }

    #[test]
    fn test_partial_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), b"x").unwrap();
        let status = ModelArtifacts::new(dir.path()).probe();
        assert_eq!(
            status,
            ArtifactStatus::Missing(vec![dir.path().join(ENCODER_FILE)])
        );
    }

    #[test]
    fn test_available_when_both_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), b"x").unwrap();
        std::fs::write(dir.path().join(ENCODER_FILE), b"y").unwrap();
        assert!(ModelArtifacts::new(dir.path()).probe().is_available());
    }

    #[test]
    fn test_directory_named_like_artifact_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(MODEL_FILE)).unwrap();
        std::fs::write(dir.path().join(ENCODER_FILE), b"y").unwrap();
        assert!(!ModelArtifacts::new(dir.path()).probe().is_available());
    }
}
