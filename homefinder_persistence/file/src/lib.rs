use std::{io, path::PathBuf};

use anyhow::Context;
use homefinder_models::theme::Preferences;
use homefinder_persistence_contracts::PreferenceRepository;
use tracing::trace;

/// Stores preferences as pretty printed json in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferenceRepository {
    path: PathBuf,
}

impl FilePreferenceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceRepository for FilePreferenceRepository {
    async fn load(&self) -> anyhow::Result<Option<Preferences>> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "no preferences stored yet");
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read preferences from {}", self.path.display())
                })
            }
        };

        serde_json::from_slice(&content)
            .map(Some)
            .with_context(|| format!("Failed to parse preferences in {}", self.path.display()))
    }

    async fn save(&self, preferences: &Preferences) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = serde_json::to_vec_pretty(preferences)?;
        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))
    }
}
