//! Default configuration values for NovaWM Core.
//!
//! Referenced from `serde(default = "...")` attributes so that missing keys in
//! a configuration file fall back to the same values as `Default::default()`.

use crate::config::LoggingConfig;
use std::path::PathBuf;

/// Returns the default `LoggingConfig`.
pub(crate) fn default_core_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(crate) fn default_log_format() -> String {
    "text".to_string()
}
