//! Traits for upstream tracker backends.

use crate::geometry::Rect;
use crate::qualifier::{FrameObservation, InputError, TrackId};

/// Trait for tracker backends that deliver one frame of tracked objects at a
/// time.
///
/// Implement this trait to feed any tracker into a
/// [`StallPipeline`](super::StallPipeline).
///
/// # Example
///
/// ```ignore
/// use stallstate_rs::{FrameObservation, TrackSource};
///
/// struct MyTracker {
///     // Your tracker here
/// }
///
/// impl TrackSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn next_observation(&mut self) -> Result<Option<FrameObservation>, Self::Error> {
///         // Run detection + tracking on the next frame
///         Ok(None)
///     }
/// }
/// ```
pub trait TrackSource {
    /// Error type for tracker failures.
    type Error;

    /// Tracked objects of the next frame, or `None` once the stream is over.
    fn next_observation(&mut self) -> Result<Option<FrameObservation>, Self::Error>;
}

/// Helper trait for converting tracker-specific outputs to `FrameObservation`.
pub trait IntoObservation {
    /// Convert the output into a validated observation.
    fn into_observation(self) -> Result<FrameObservation, InputError>;
}

impl IntoObservation for FrameObservation {
    fn into_observation(self) -> Result<FrameObservation, InputError> {
        Ok(self)
    }
}

impl IntoObservation for Vec<(TrackId, Rect)> {
    fn into_observation(self) -> Result<FrameObservation, InputError> {
        let (ids, boxes): (Vec<TrackId>, Vec<Rect>) = self.into_iter().unzip();
        FrameObservation::new(boxes, ids)
    }
}
