//! Storage location resolution.
//!
//! Persistence lives at a fixed location under the host platform's
//! per-app data directory convention (`~/.local/share/postpad` on Linux,
//! `Application Support` on macOS, `AppData` on Windows).

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a data directory for this platform")]
    NoProjectDirs,

    #[error("Failed to create storage directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolved filesystem layout for the app's private document storage.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub data_dir: PathBuf,
    pub database_file: PathBuf,
    pub images_dir: PathBuf,
}

impl StoragePaths {
    /// Resolve against the platform document-directory convention,
    /// creating the directories on first use.
    pub fn resolve() -> Result<Self, ConfigError> {
        let dirs =
            ProjectDirs::from("com", "postpad", "postpad").ok_or(ConfigError::NoProjectDirs)?;
        Self::at(dirs.data_dir().to_path_buf())
    }

    /// Lay out storage under an explicit root. Used by tests and by hosts
    /// that manage their own document directory.
    pub fn at(data_dir: PathBuf) -> Result<Self, ConfigError> {
        let images_dir = data_dir.join("images");
        std::fs::create_dir_all(&images_dir)?;

        Ok(Self {
            database_file: data_dir.join("postpad.sqlite"),
            data_dir,
            images_dir,
        })
    }
}
