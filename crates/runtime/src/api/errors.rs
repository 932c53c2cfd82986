//! Error types surfaced by the runtime.
//!
//! None of these are fatal. A failed snapshot skips one tick; a chat log
//! failure skips one sub-step of one behavior.
use farm_core::{FailureClass, FarmError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("missing required collaborator: {0}")]
    MissingCollaborator(&'static str),
}

impl FarmError for RuntimeError {
    fn class(&self) -> FailureClass {
        match self {
            Self::Snapshot(err) => err.class(),
            Self::MissingCollaborator(_) => FailureClass::InvalidInput,
        }
    }
}

/// The world snapshot could not be refreshed this tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("world snapshot unavailable: {0}")]
    Unavailable(String),

    #[error("world snapshot source exhausted")]
    Exhausted,
}

impl FarmError for SnapshotError {
    fn class(&self) -> FailureClass {
        FailureClass::Transient
    }
}

/// The chat log changed underneath a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatLogError {
    #[error("chat log modified during scan")]
    Modified,
}

impl FarmError for ChatLogError {
    fn class(&self) -> FailureClass {
        FailureClass::Transient
    }
}
