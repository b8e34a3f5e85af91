//! StallPipeline for combining a tracker with stall state qualification.

use crate::qualifier::{ConfigError, QualifierConfig, StateMap};

use super::{StallMonitor, TrackSource};

/// Bundles any `TrackSource` with a [`StallMonitor`].
///
/// This struct provides a convenient way to run end-to-end stall monitoring:
/// every call pulls one frame from the source and labels its objects.
pub struct StallPipeline<S: TrackSource> {
    source: S,
    monitor: StallMonitor,
}

impl<S: TrackSource> StallPipeline<S> {
    /// Create a new pipeline with the given source and qualifier config.
    pub fn new(source: S, config: QualifierConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            source,
            monitor: StallMonitor::new(config)?,
        })
    }

    /// Process the next frame of the source.
    ///
    /// # Returns
    /// The labels of the frame, `None` once the source is exhausted, or a
    /// source error. A source error leaves the qualifier untouched.
    pub fn process_frame(&mut self) -> Result<Option<StateMap>, S::Error> {
        let Some(observation) = self.source.next_observation()? else {
            return Ok(None);
        };
        Ok(Some(self.monitor.observe(observation)))
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the underlying monitor.
    pub fn monitor(&self) -> &StallMonitor {
        &self.monitor
    }
}
