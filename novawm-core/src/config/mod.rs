//! Configuration management for NovaWM Core.
//!
//! - [`types`]: the configuration schema ([`CoreConfig`], [`LoggingConfig`]).
//! - [`defaults`]: default values used by Serde for missing keys.
//! - [`loader`]: [`ConfigLoader`], which finds, parses and validates the file.
//!
//! Loading process:
//!
//! 1. `ConfigLoader::load()` resolves `config.toml` in the user configuration directory.
//! 2. A missing file produces `CoreConfig::default()`.
//! 3. An existing file is parsed as TOML; errors map to [`crate::error::ConfigError::ParseError`].
//! 4. The result is validated and normalized; failures map to
//!    [`crate::error::ConfigError::ValidationError`].

pub(crate) mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig};
