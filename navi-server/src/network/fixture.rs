//! Network data served from local JSON files.
//!
//! Useful for development and testing without reaching the provider.
//! Files are read on every call; put a [`crate::cache`] in front.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Line;

use super::error::{NetworkError, validate_world};
use super::types::parse_lines;

/// Serves worlds from `{dir}/{world}.json`.
#[derive(Debug, Clone)]
pub struct FixtureNetwork {
    dir: PathBuf,
}

impl FixtureNetwork {
    /// Create a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory worlds are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the lines of `world`.
    pub async fn fetch(&self, world: &str) -> Result<Vec<Line>, NetworkError> {
        validate_world(world)?;

        let path = self.dir.join(format!("{world}.json"));
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(NetworkError::UnknownWorld(world.to_string()));
            }
            Err(e) => {
                return Err(NetworkError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        let lines = parse_lines(&contents).map_err(|e| NetworkError::Json {
            message: format!("{}: {}", path.display(), e),
        })?;

        debug!(world, path = %path.display(), lines = lines.len(), "loaded fixture network");
        Ok(lines)
    }

    /// Worlds available in the directory, sorted.
    pub async fn worlds(&self) -> Result<Vec<String>, NetworkError> {
        let io_err = |e: std::io::Error| NetworkError::Io {
            path: self.dir.display().to_string(),
            message: e.to_string(),
        };

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(io_err)?;
        let mut worlds = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && validate_world(stem).is_ok()
            {
                worlds.push(stem.to_string());
            }
        }
        worlds.sort();
        Ok(worlds)
    }
}
