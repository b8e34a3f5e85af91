//! Parking stall occupancy states from multi-object tracker output.
//!
//! A [`StateQualifier`] watches one stall. Every frame it receives the tracked
//! boxes of the current and previous frame and labels each visible identity
//! as arriving in the stall, having recently left it, moving, or nothing
//! notable.

pub mod geometry;
pub mod integration;
pub mod qualifier;

pub use geometry::Rect;
pub use integration::{
    IntoObservation, JsonLinesError, JsonLinesSource, ObservationBuilder, StallMonitor,
    StallPipeline, TrackSource,
};
pub use qualifier::{
    ConfigError, Error, FrameObservation, InputError, LeaverCountdown, QualifierConfig,
    StateLabel, StateMap, StateQualifier, TrackId,
};
