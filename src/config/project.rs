use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ViewerSettings;
use crate::error::{CatalogError, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "FRAC_SHOWCASE_CONFIG";

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".frac-showcase.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Catalog bootstrap settings
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// External viewer settings
    #[serde(default)]
    pub viewer: ViewerSettings,
}

/// Catalog bootstrap settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Start the session with the bundled sample tools
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl ShowcaseConfig {
    /// Load configuration.
    ///
    /// Search order:
    /// 1. Path in `FRAC_SHOWCASE_CONFIG`
    /// 2. `.frac-showcase.toml` in the current directory
    /// 3. `~/.frac-showcase/config.toml`
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from_file(path);
        }

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            return Self::load_from_file(project);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::load_from_file(user);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::Config(e.to_string()))
    }

    fn user_config_path() -> Option<PathBuf> {
        let home = std::env::var("HOME").ok()?;
        Some(
            PathBuf::from(home)
                .join(".frac-showcase")
                .join("config.toml"),
        )
    }
}
