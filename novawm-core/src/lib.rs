//! # NovaWM Core Library (`novawm-core`)
//!
//! `novawm-core` is the foundational library for the NovaWM window manager.
//! It carries everything the policy layer (`novawm-domain`) needs but that has
//! nothing to do with window-management policy itself:
//!
//! - **Error Handling**: the `CoreError` enum and its specific error types
//!   `ConfigError` and `LoggingError`.
//! - **Core Data Types**: integer geometry (`Point`, `Size`, `Rect`) used for
//!   window geometry and monitor bounds, and the cardinal `Direction` used for
//!   monitor navigation.
//! - **Configuration Management**: TOML loading and validation of the
//!   `CoreConfig` through `ConfigLoader`.
//! - **Logging**: initialisation of a `tracing` subscriber with console and
//!   optional file output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use novawm_core::config::ConfigLoader;
//! use novawm_core::logging::init_logging;
//! use novawm_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core_config = ConfigLoader::load()?;
//!     init_logging(&core_config.logging, false)?;
//!     tracing::info!("NovaWM core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export key types for convenience
pub use config::{ConfigLoader, CoreConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Direction, Point, Rect, Size};
