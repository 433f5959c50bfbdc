//! Managed windows and the policy state around them.

pub mod model;
pub mod types;

pub use model::ClientModel;
pub use types::{Desktop, InitialState, Layer, ModelConfig, ScaleMode, WindowId, DEF_LAYER, MAX_LAYER, MIN_LAYER};
