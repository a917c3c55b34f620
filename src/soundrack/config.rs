use crate::catalog::render::{ListOptions, SortPolicy};
use crate::catalog::scan::ScanOptions;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a catalog root, stored as `config.json` inside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Recognized audio extensions (e.g. "mp3", "wav")
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Listing order within each level of the tree
    #[serde(default)]
    pub sort: SortPolicy,
}

fn default_extensions() -> Vec<String> {
    vec!["mp3".to_string()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            sort: SortPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    /// Formatted value for a config key, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "extensions" => Some(self.extensions.join(", ")),
            "sort" => Some(self.sort.to_string()),
            _ => None,
        }
    }

    /// Set a config key from its string form. Extensions take a
    /// comma-separated list and are normalized (folded, leading dot
    /// stripped).
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "extensions" => {
                let extensions: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if extensions.is_empty() {
                    return Err("extensions cannot be empty".to_string());
                }
                self.extensions = extensions;
                Ok(())
            }
            "sort" => {
                self.sort = value.parse()?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(&self.extensions)
    }

    pub fn list_options(&self, expand_all: bool) -> ListOptions {
        ListOptions {
            expand_all,
            sort: self.sort,
        }
    }
}
