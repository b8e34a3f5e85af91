mod config;
mod error;
mod frame;
mod state_label;
mod state_qualifier;

pub use config::{DEFAULT_LEFT_TRACKING_ITERATIONS, LeaverCountdown, QualifierConfig};
pub use error::{ConfigError, Error, FrameRole, InputError};
pub use frame::{FrameObservation, TrackId};
pub use state_label::StateLabel;
pub use state_qualifier::{MOTION_THRESHOLD, StateMap, StateQualifier};
