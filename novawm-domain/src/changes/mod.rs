//! Change records: the only channel through which the client model reports
//! its mutations to the outside world.

pub mod events;
pub mod log;

pub use events::Change;
pub use log::ChangeLog;
