use crate::error::{LibraryError, Result};
use crate::store::fs::DEFAULT_STORAGE_FILE;
use crate::store::LoadPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bookshelf, stored in `config.json` in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Path of the catalogue file. Relative paths resolve against the working directory.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Refuse to work on a catalogue file that does not decode.
    #[serde(default)]
    pub strict_load: bool,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_FILE)
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            strict_load: false,
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibraryError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| LibraryError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Applies command-line overrides on top of the stored values.
    pub fn with_overrides(mut self, storage_path: Option<PathBuf>, strict: bool) -> Self {
        if let Some(path) = storage_path {
            self.storage_path = path;
        }
        self.strict_load |= strict;
        self
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict_load {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.storage_path, PathBuf::from("library.json"));
        assert!(!config.strict_load);
        assert_eq!(config.load_policy(), LoadPolicy::Lenient);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = LibraryConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = tempdir().unwrap();
        let config = LibraryConfig {
            storage_path: PathBuf::from("/srv/books/library.json"),
            strict_load: true,
        };
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();

        let loaded = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"strict_load": true}"#).unwrap();

        let loaded = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.storage_path, PathBuf::from("library.json"));
        assert_eq!(loaded.load_policy(), LoadPolicy::Strict);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "storage_path=").unwrap();

        let err = LibraryConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, LibraryError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = LibraryConfig::default().with_overrides(Some(PathBuf::from("b.json")), true);
        assert_eq!(config.storage_path, PathBuf::from("b.json"));
        assert!(config.strict_load);

        let config = LibraryConfig {
            storage_path: PathBuf::from("a.json"),
            strict_load: true,
        }
        .with_overrides(None, false);
        assert_eq!(config.storage_path, PathBuf::from("a.json"));
        assert!(config.strict_load);
    }
}
