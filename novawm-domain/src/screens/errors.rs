use novawm_core::types::Rect;
use thiserror::Error;

/// Why a monitor topology could not be rebuilt. The previous topology is
/// left in place whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    #[error("No monitor has its origin at (0, 0); cannot root the monitor graph.")]
    NoRootMonitor,

    #[error("Monitor box {0:?} has zero width or height.")]
    DegenerateMonitor(Rect),
}
