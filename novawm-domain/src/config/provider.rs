use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use novawm_core::config::ConfigLoader;
use novawm_core::error::{ConfigError, CoreError};
use tracing::{debug, info, warn};

use super::errors::WmConfigError;
use super::types::WmConfig;

/// File name of the window-manager configuration inside the config directory.
pub const WM_CONFIG_FILE_NAME: &str = "wm.toml";

pub trait WmConfigProvider: Send + Sync {
    fn load_wm_config(&self) -> Result<WmConfig, WmConfigError>;
}

/// Reads [`WmConfig`] from a TOML file. A missing file yields the defaults.
#[derive(Debug, Clone)]
pub struct FilesystemConfigProvider {
    pub path: PathBuf,
}

impl FilesystemConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provider for `wm.toml` in the user's NovaWM config directory.
    pub fn in_config_dir() -> Result<Self, WmConfigError> {
        let dir = ConfigLoader::config_dir()?;
        Ok(Self::new(dir.join(WM_CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WmConfigProvider for FilesystemConfigProvider {
    fn load_wm_config(&self) -> Result<WmConfig, WmConfigError> {
        debug!("Loading window manager config from {:?}", self.path);
        let toml_string = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No window manager config at {:?}. Using defaults.", self.path);
                return Ok(WmConfig::default());
            }
            Err(e) => {
                warn!("Failed to read window manager config {:?}: {}", self.path, e);
                return Err(WmConfigError::LoadError {
                    path: self.path.clone(),
                    source: CoreError::Config(ConfigError::ReadError {
                        path: self.path.clone(),
                        source: e,
                    }),
                });
            }
        };

        let config: WmConfig = toml::from_str(&toml_string).map_err(|e| {
            warn!("Failed to deserialize window manager config {:?}: {}", self.path, e);
            WmConfigError::DeserializationError {
                message: format!("Failed to parse TOML in {:?}", self.path),
                snippet: Some(toml_string.chars().take(200).collect()),
                source: Some(e),
            }
        })?;
        config.validate()?;

        info!(
            "Loaded window manager config: {} desktop(s), {} window class rule(s).",
            config.desktops,
            config.class_actions.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn provider_for(contents: &str) -> (NamedTempFile, FilesystemConfigProvider) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let provider = FilesystemConfigProvider::new(file.path());
        (file, provider)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let provider = FilesystemConfigProvider::new(dir.path().join(WM_CONFIG_FILE_NAME));
        assert_eq!(provider.load_wm_config().unwrap(), WmConfig::default());
    }

    #[test]
    fn loads_valid_file() {
        let (_file, provider) = provider_for("desktops = 9\nborder_width = 1\n");
        let config = provider.load_wm_config().unwrap();
        assert_eq!(config.desktops, 9);
        assert_eq!(config.border_width, 1);
        assert_eq!(config.shell, "xterm");
    }

    #[test]
    fn malformed_file_is_a_deserialization_error() {
        let (_file, provider) = provider_for("desktops = \"many\"");
        match provider.load_wm_config() {
            Err(WmConfigError::DeserializationError { snippet, source, .. }) => {
                assert_eq!(snippet.as_deref(), Some("desktops = \"many\""));
                assert!(source.is_some());
            }
            other => panic!("Expected DeserializationError, got {:?}", other),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        let (_file, provider) = provider_for("desktops = 0");
        assert!(matches!(provider.load_wm_config(), Err(WmConfigError::InvalidData { .. })));
    }

    #[test]
    fn unreadable_path_is_a_load_error() {
        // A directory cannot be read as a file.
        let dir = tempdir().unwrap();
        let provider = FilesystemConfigProvider::new(dir.path());
        assert!(matches!(provider.load_wm_config(), Err(WmConfigError::LoadError { .. })));
    }
}
