//! Error module for the NovaWM domain layer.

use thiserror::Error;

use novawm_core::CoreError;

use crate::actions::ClassActionError;
use crate::category_map::CategoryError;
use crate::config::WmConfigError;
use crate::screens::TopologyError;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
///
/// Most model operations never fail: rejected calls are silent no-ops. What
/// remains are configuration and monitor-topology failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Config(#[from] WmConfigError),

    #[error(transparent)]
    ClassAction(#[from] ClassActionError),
}
