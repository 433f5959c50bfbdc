use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassActionError {
    #[error("Unknown window class action '{0}'")]
    UnknownAction(String),
    #[error("Invalid layer in action '{0}': expected a number from 1 to 9")]
    InvalidLayer(String),
    #[error("Unknown snap side '{0}': expected left, right, top or bottom")]
    UnknownSnapSide(String),
}
