//! StallMonitor: a StateQualifier that remembers the previous frame.

use crate::qualifier::{ConfigError, FrameObservation, QualifierConfig, StateMap, StateQualifier};

/// Feeds frames one at a time to a [`StateQualifier`], pairing each with the
/// frame observed before it.
///
/// The first frame is classified against an empty previous frame, so no
/// object can be reported as moving on it.
#[derive(Debug, Clone)]
pub struct StallMonitor {
    qualifier: StateQualifier,
    previous: FrameObservation,
    frame_id: u64,
}

impl StallMonitor {
    pub fn new(config: QualifierConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_qualifier(StateQualifier::new(config)?))
    }

    pub fn from_qualifier(qualifier: StateQualifier) -> Self {
        Self {
            qualifier,
            previous: FrameObservation::empty(),
            frame_id: 0,
        }
    }

    /// Classify `current` against the previously observed frame, then
    /// remember it for the next call.
    pub fn observe(&mut self, current: FrameObservation) -> StateMap {
        self.frame_id += 1;
        let states = self.qualifier.classify(&current, &self.previous);
        self.previous = current;
        states
    }

    /// Number of frames observed so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    pub fn previous(&self) -> &FrameObservation {
        &self.previous
    }

    pub fn qualifier(&self) -> &StateQualifier {
        &self.qualifier
    }
}
