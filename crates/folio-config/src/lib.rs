//! Configuration system for folio.
//!
//! folio uses a TOML configuration file named `.folio.toml`. The file is
//! looked up in the current working directory first, then as the global
//! `~/.folio.toml`. When neither exists the defaults apply, with the
//! data file placed in the working directory.

#![warn(missing_docs)]

mod discovery;
mod error;
mod templates;
mod validate;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_file, global_config_path, is_global_config};
pub use error::ConfigError;
use serde::{Deserialize, Serialize};
pub use templates::local_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default data file name, used when no config file is found.
const DEFAULT_DATA_FILE: &str = "portfolio.json";

/// Resolved configuration for folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSON data file. Relative paths in the config file are
    /// resolved against the directory containing that file.
    pub data_path: PathBuf,
    /// Default rows per page for project listings.
    pub page_size: usize,
    /// Identity used for admin sessions.
    pub admin_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: 10,
            admin_email: String::from("admin@example.com"),
        }
    }
}

impl Config {
    /// Loads configuration for the given working directory.
    ///
    /// Discovers the config file (local `.folio.toml`, else the global
    /// one), parses it, and resolves `data_path` relative to the file's
    /// directory. Returns defaults with `data_path` under `cwd` when no
    /// config file exists.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match discover_config_file(cwd) {
            Some(path) => Self::load_from_file(&path),
            None => {
                let mut config = Self::default();
                config.data_path = cwd.join(DEFAULT_DATA_FILE);
                Ok(config)
            }
        }
    }

    /// Loads configuration from a specific config file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?;

        if config.data_path.is_relative()
            && let Some(dir) = path.parent()
        {
            config.data_path = dir.join(&config.data_path);
        }
        Ok(config)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A data file that does not exist yet
    /// - A page size of zero
    /// - An admin email that does not look like one
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective configuration to TOML format.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).expect("config serialization should not fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("portfolio.json"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.admin_email, "admin@example.com");
    }

    #[test]
    fn load_without_config_file_uses_cwd_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.data_path, dir.path().join("portfolio.json"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn load_parses_local_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "data_path = \"data/site.json\"\npage_size = 25\nadmin_email = \"me@site.dev\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.data_path, dir.path().join("data/site.json"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.admin_email, "me@site.dev");
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "page_size = 3\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.data_path, dir.path().join("portfolio.json"));
        assert_eq!(config.admin_email, "admin@example.com");
    }

    #[test]
    fn absolute_data_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "data_path = \"/var/data/site.json\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/var/data/site.json"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "page_size = \"lots\"\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn to_toml_round_trips() {
        let config = Config {
            data_path: PathBuf::from("site.json"),
            page_size: 7,
            admin_email: "a@b.c".into(),
        };
        let toml = config.to_toml();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.page_size, 7);
        assert_eq!(parsed.data_path, PathBuf::from("site.json"));
    }
}
