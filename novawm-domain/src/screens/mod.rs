//! Physical monitor layout.
//!
//! [`ScreenTopology`] turns the flat list of monitor boxes reported by the
//! display binding into a navigable graph.

pub mod errors;
pub mod topology;

pub use errors::TopologyError;
pub use topology::{MonitorId, ScreenTopology};
