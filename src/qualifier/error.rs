//! Error types for frame validation and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::Rect;
use crate::qualifier::frame::TrackId;

/// A frame observation that violates the input contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("frame has {boxes} boxes but {ids} identities")]
    LengthMismatch { boxes: usize, ids: usize },
    #[error("box {rect:?} of identity {id} is inverted or not finite")]
    MalformedBox { id: TrackId, rect: Rect },
    #[error("identity {0} appears more than once in the same frame")]
    DuplicateIdentity(TrackId),
}

/// Which of the two frames handed to a classification step was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRole {
    Current,
    Previous,
}

impl std::fmt::Display for FrameRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Previous => write!(f, "previous"),
        }
    }
}

/// Invalid qualifier configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("left_tracking_iterations must not be negative, got {0}")]
    NegativeLeftTrackingIterations(i64),
    #[error("left_tracking_iterations {0} is out of range")]
    LeftTrackingIterationsOutOfRange(i64),
    #[error("monitored region {0:?} is inverted or not finite")]
    MalformedRegion(Rect),
    #[error("monitored_region is required")]
    MissingRegion,
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed {role} frame: {source}")]
    MalformedInput {
        role: FrameRole,
        #[source]
        source: InputError,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl Error {
    pub(crate) fn input(role: FrameRole, source: InputError) -> Self {
        Self::MalformedInput { role, source }
    }
}
