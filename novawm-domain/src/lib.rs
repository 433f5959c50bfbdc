//! Policy core of the NovaWM window manager.
//!
//! This crate decides where windows live and who has the focus, without ever
//! talking to a display server. The display binding feeds it events (a window
//! appeared, the user pressed a key, monitors changed), the
//! [`ClientModel`] validates and applies them, and every resulting mutation
//! is queued as a [`Change`] record for the binding to carry out.
//!
//! - [`clients`]: the [`ClientModel`] and its value types.
//! - [`changes`]: [`Change`] records and the [`ChangeLog`] queue.
//! - [`screens`]: the monitor graph, [`ScreenTopology`].
//! - [`category_map`]: the exclusive category multimap behind desktops and layers.
//! - [`focus_cycle`]: Alt-Tab style cycling over a window list.
//! - [`actions`] and [`config`]: per-class rules and `wm.toml`.

// Re-export core module
pub use novawm_core as core;

pub mod actions;
pub mod category_map;
pub mod changes;
pub mod clients;
pub mod config;
pub mod error;
pub mod focus_cycle;
pub mod screens;

pub use actions::{ClassAction, ClassActionError, ClassActions, SnapSide};
pub use category_map::{CategoryError, CategoryMultimap};
pub use changes::{Change, ChangeLog};
pub use clients::{ClientModel, Desktop, InitialState, Layer, ModelConfig, ScaleMode, WindowId};
pub use config::{FilesystemConfigProvider, WmConfig, WmConfigError, WmConfigProvider};
pub use error::{DomainError, DomainResult};
pub use focus_cycle::FocusCycle;
pub use screens::{MonitorId, ScreenTopology, TopologyError};
