//! Core data types used throughout NovaWM.
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`] in whole pixels.
//! - **Direction**: [`Direction`] for on-screen navigation.
//!
//! All types are `Copy` and serializable with Serde.

pub mod direction;
pub mod geometry;

pub use direction::Direction;
pub use geometry::{Point, Rect, Size};
