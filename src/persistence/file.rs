//! File-backed high-score store.
//!
//! The file holds one decimal integer. Writes go to a sibling temporary
//! file that is then renamed over the target, so a crash mid-write leaves
//! either the old score or the new one, never a torn file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::store::HighScoreStore;
use crate::core::SessionConfig;
use crate::error::StoreError;

/// High score kept in a text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured `high_score_path`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.high_score_path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "high_score".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u32, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let trimmed = content.trim();
        trimmed.parse().map_err(|_| StoreError::Corrupt {
            content: trimmed.to_string(),
        })
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        let mut file = fs::File::create(&temp).map_err(|e| self.io_error(e))?;
        file.write_all(score.to_string().as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))
    }
}
