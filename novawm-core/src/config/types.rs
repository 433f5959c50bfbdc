//! Configuration data structures for NovaWM Core.
//!
//! - [`CoreConfig`]: the root configuration structure.
//! - [`LoggingConfig`]: configuration of the logging subsystem.
//!
//! Missing fields take their defaults from [`super::defaults`]; unknown
//! fields are rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use novawm_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/novawm.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/novawm.log")));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level to record: "trace", "debug", "info", "warn" or "error"
    /// (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path of a log file. `None` disables file logging. Relative
    /// paths are resolved against the application's data directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// Output format, "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_core_logging_config()
    }
}

/// Root configuration structure for NovaWM Core.
///
/// Window-manager policy settings (desktop count, class rules, ...) live in
/// the domain crate; this struct only holds what the core layer itself needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_core_logging_config")]
    pub logging: LoggingConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_core_logging_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default_values() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn test_core_config_deserialize_partial_logging() {
        let config: CoreConfig = toml::from_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn test_core_config_rejects_unknown_fields() {
        let result: Result<CoreConfig, _> = toml::from_str("[logging]\nverbosity = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_core_config_deserialize_from_json() {
        let json_data = r#"{ "logging": { "level": "trace", "file_path": "/var/log/wm.log", "format": "json" } }"#;
        let config: CoreConfig = serde_json::from_str(json_data).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.file_path, Some(PathBuf::from("/var/log/wm.log")));
        assert_eq!(config.logging.format, "json");
    }
}
