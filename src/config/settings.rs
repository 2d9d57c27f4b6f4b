use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassKeepError, Result};

/// Project-level configuration, loaded from `.passkeep.toml`.
///
/// Every field has a sensible default so PassKeep works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the password store, relative to the working directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Seconds before a copied secret is cleared from the clipboard.
    #[serde(default = "default_clear_delay_secs")]
    pub clear_delay_secs: u64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_store_file() -> String {
    "passdb".to_string()
}

fn default_clear_delay_secs() -> u64 {
    15
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            clear_delay_secs: default_clear_delay_secs(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passkeep.toml";

    /// Load settings from `<dir>/.passkeep.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassKeepError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the store file inside `dir`.
    pub fn store_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.store_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();

        assert_eq!(settings.store_file, "passdb");
        assert_eq!(settings.clear_delay_secs, 15);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".passkeep.toml"), "store_file = \"vault.db\"\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.store_file, "vault.db");
        assert_eq!(settings.clear_delay_secs, 15);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".passkeep.toml"), "store_file = [not toml").unwrap();

        assert!(Settings::load(dir.path()).is_err());
    }

    #[test]
    fn store_path_joins_directory_and_file_name() {
        let settings = Settings::default();
        assert_eq!(
            settings.store_path(Path::new("/work")),
            PathBuf::from("/work/passdb")
        );
    }
}
