//! Startup and host-boundary failures
//!
//! The simulation itself cannot fail; these cover the drawing surface, the
//! key-value store and the tuning overrides.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// No usable 2D drawing surface
    SurfaceUnavailable(String),
    /// Key-value store missing or rejected an operation
    StorageUnavailable(String),
    /// Tuning values failed to parse or validate
    InvalidTuning(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable(reason) => write!(f, "drawing surface unavailable: {reason}"),
            Self::StorageUnavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::InvalidTuning(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
