//! Project configuration and changelog path resolution.
//!
//! The project root is always passed in explicitly (from `--root`,
//! `CHANGELOG_ROOT` or the working directory). An optional `.changelog.json`
//! in that root can rename the changelog folder and the placeholder file.

use crate::core::error::{ChangelogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".changelog.json";
pub const RELEASED_DIR: &str = "released";
pub const UNRELEASED_DIR: &str = "unreleased";

/// Settings read from `.changelog.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    pub changelog_dir: String,
    pub marker_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            changelog_dir: "changelog".to_string(),
            marker_file: ".gitkeep".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub root: PathBuf,
    pub project: ProjectConfig,
}

impl Config {
    /// Configuration with default settings rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            project: ProjectConfig::default(),
        }
    }

    /// Load `.changelog.json` from `root` if present, defaults otherwise
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config_file = root.join(CONFIG_FILE_NAME);

        let project = if config_file.is_file() {
            log::debug!("Loading project config from {}", config_file.display());
            let content = std::fs::read_to_string(&config_file)
                .map_err(|e| ChangelogError::read_failed(&config_file, e))?;
            serde_json::from_str::<ProjectConfig>(&content)
                .map_err(|e| ChangelogError::config(&config_file, e))?
        } else {
            log::debug!("No {CONFIG_FILE_NAME} in {}, using defaults", root.display());
            ProjectConfig::default()
        };

        Ok(Self { root, project })
    }

    pub fn save(&self) -> Result<()> {
        let config_file = self.root.join(CONFIG_FILE_NAME);
        let content = serde_json::to_string_pretty(&self.project)
            .map_err(|e| ChangelogError::config(&config_file, e))?;
        std::fs::write(&config_file, content)
            .map_err(|e| ChangelogError::write_failed(&config_file, e))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.project.changelog_dir)
    }

    pub fn released_path(&self) -> PathBuf {
        self.changelog_path().join(RELEASED_DIR)
    }

    pub fn unreleased_path(&self) -> PathBuf {
        self.changelog_path().join(UNRELEASED_DIR)
    }

    pub fn marker_file(&self) -> &str {
        &self.project.marker_file
    }
}
