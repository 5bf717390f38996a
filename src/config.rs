//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Persisted preferences for the description generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory of the last successful save
    pub last_save_dir: Option<PathBuf>,
    /// Recently written description files
    pub recent_files: Vec<PathBuf>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "bidsdesc", "BidsDesc")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Record a successful save so the next dialog opens nearby
    pub fn note_saved(&mut self, path: &Path) {
        if let Some(dir) = path.parent() {
            self.last_save_dir = Some(dir.to_path_buf());
        }
        self.add_recent_file(path.to_path_buf());
    }

    /// Add a file to recent files
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already exists
        self.recent_files.retain(|p| p != &path);
        // Add to front
        self.recent_files.insert(0, path);
        // Keep only last 10
        self.recent_files.truncate(10);
    }
}
