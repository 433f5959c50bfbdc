//! Window-manager configuration: desktop count, decoration and per-class rules.

pub mod errors;
pub mod provider;
pub mod types;

pub use errors::WmConfigError;
pub use provider::{FilesystemConfigProvider, WmConfigProvider, WM_CONFIG_FILE_NAME};
pub use types::WmConfig;
