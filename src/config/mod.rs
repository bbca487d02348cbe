//! Configuration management.

use crate::models::WatchFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for cinelog.
#[derive(Debug, Clone)]
pub struct CinelogConfig {
    /// Directory holding store files.
    pub data_dir: PathBuf,
    /// Store instance name (file stem of the store file).
    pub store_name: String,
    /// Filter applied by `list` when none is given.
    pub default_filter: WatchFilter,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// Store instance name.
    pub store_name: Option<String>,
    /// Default list filter.
    pub default_filter: Option<String>,
}

impl Default for CinelogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_name: "cinelog".to_string(),
            default_filter: WatchFilter::All,
        }
    }
}

impl CinelogConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {}", path.display(), e),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/cinelog/` on macOS)
    /// 2. XDG config dir (`~/.config/cinelog/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs.config_dir().join("cinelog").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("cinelog")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Returns the path of the store file this configuration points at.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.store_name))
    }

    /// Converts a `ConfigFile` to `CinelogConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(data_dir) = file.data_dir {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Some(store_name) = file.store_name {
            config.store_name = store_name;
        }
        if let Some(filter) = file.default_filter {
            config.default_filter = WatchFilter::parse(&filter).unwrap_or_default();
        }

        config
    }
}

/// Returns the platform-local data directory for store files.
fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".cinelog"),
        |base| base.data_local_dir().join("cinelog"),
    )
}
