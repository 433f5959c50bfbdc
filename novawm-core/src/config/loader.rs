//! Configuration loading for NovaWM Core.
//!
//! [`ConfigLoader`] locates `config.toml`, deserializes it into a
//! [`CoreConfig`], applies defaults, and validates the result.
//!
//! ```rust,ignore
//! use novawm_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("Logging level: {}", config.logging.level),
//!     Err(e) => {
//!         novawm_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Configuration File Location
//!
//! `ConfigLoader::load()` reads `config.toml` from the per-user configuration
//! directory resolved by `directories-next` (on Linux usually
//! `$XDG_CONFIG_HOME/novawm/`). A missing file yields the default
//! configuration.

use std::fs;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "NovaWM";
const APPLICATION: &str = "novawm";

/// File name looked up inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Namespace for the static configuration loading functions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the `CoreConfig` from the user configuration directory.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no home directory can be determined.
    /// - [`ConfigError::ReadError`] / [`ConfigError::ParseError`] for unreadable or malformed files.
    /// - [`ConfigError::ValidationError`] for out-of-range values.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = Self::config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from_path(&path)
    }

    /// Loads and validates the `CoreConfig` from an explicit path. A missing
    /// or blank file yields the default configuration.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let mut config = match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => CoreConfig::default(),
            Ok(content) => toml::from_str(&content).map_err(ConfigError::ParseError)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No configuration at {:?}, using defaults.", path);
                CoreConfig::default()
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into())
            }
        };
        Self::validate_config(&mut config)?;
        tracing::info!("Loaded core configuration from {:?}", path);
        Ok(config)
    }

    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Directory that relative log file paths are resolved against.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    fn project_dirs() -> Result<ProjectDirs, ConfigError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
            ConfigError::DirectoryUnavailable {
                dir_type: "project directories".to_string(),
            }
        })
    }

    /// Normalizes log level and format to lowercase, rejects unknown values,
    /// and resolves a relative log file path against [`Self::data_dir`].
    fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(path) = &config.logging.file_path {
            if !path.is_absolute() {
                config.logging.file_path = Some(Self::data_dir()?.join(path));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn blank_file_yields_defaults() {
        let file = write_config("   \n");
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn level_and_format_are_normalized() {
        let file = write_config("[logging]\nlevel = \"DEBUG\"\nformat = \"Json\"\n");
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn invalid_level_is_rejected() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ValidationError(_))));
    }

    #[test]
    fn invalid_format_is_rejected() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ValidationError(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[logging\nlevel = ");
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn absolute_log_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("wm.log");
        let file = write_config(&format!("[logging]\nfile_path = {:?}\n", log_path));
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.file_path, Some(log_path));
    }
}
