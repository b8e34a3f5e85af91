//! Occupancy state machine for a single monitored stall.

use std::collections::{BTreeMap, HashMap};

use crate::geometry::{Rect, centroids, distance};
use crate::qualifier::config::{LeaverCountdown, QualifierConfig};
use crate::qualifier::error::{ConfigError, Error, FrameRole};
use crate::qualifier::frame::{FrameObservation, TrackId};
use crate::qualifier::state_label::StateLabel;

/// Centroid displacement (pixels) between consecutive frames above which an
/// object is reported as moving. The comparison is strict.
pub const MOTION_THRESHOLD: f32 = 20.0;

/// Labels for every identity of the current frame.
pub type StateMap = BTreeMap<TrackId, StateLabel>;

/// Assigns `ARRIVED` / `LEFT` / `MOVE` labels to tracked objects around one
/// parking stall.
///
/// The qualifier remembers which identity occupies the stall and which one
/// vacated it most recently. The latter keeps being reported as `LEFT` for
/// `left_tracking_iterations` countdown ticks.
///
/// Identities of a frame are processed in input order. When two identities
/// overlap the stall in the same frame, the one processed last becomes the
/// occupant.
#[derive(Debug, Clone)]
pub struct StateQualifier {
    config: QualifierConfig,
    occupant: Option<TrackId>,
    recent_leaver: Option<TrackId>,
    leaver_ttl: Option<u32>,
}

impl StateQualifier {
    /// Create a qualifier, rejecting a config whose region is inverted or
    /// not finite.
    pub fn new(config: QualifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            occupant: None,
            recent_leaver: None,
            leaver_ttl: None,
        })
    }

    /// Qualifier for `monitored_region` with default settings.
    pub fn with_region(monitored_region: Rect) -> Result<Self, ConfigError> {
        Self::new(QualifierConfig::new(monitored_region))
    }

    pub fn config(&self) -> &QualifierConfig {
        &self.config
    }

    pub fn monitored_region(&self) -> &Rect {
        &self.config.monitored_region
    }

    /// Identity currently parked in the stall.
    pub fn occupant(&self) -> Option<TrackId> {
        self.occupant
    }

    /// Identity that most recently vacated the stall, while still remembered.
    pub fn recent_leaver(&self) -> Option<TrackId> {
        self.recent_leaver
    }

    /// Remaining countdown ticks for the recent leaver, `None` when inactive.
    pub fn leaver_ttl(&self) -> Option<u32> {
        self.leaver_ttl
    }

    /// Label every identity of `current`.
    ///
    /// For each identity, in input order:
    /// 1. `MOVE` if it was present in `previous` and its centroid moved more
    ///    than [`MOTION_THRESHOLD`];
    /// 2. `LEFT` if it is the remembered recent leaver;
    /// 3. `ARRIVED` if its box overlaps the monitored region, which also makes
    ///    it the occupant;
    /// 4. otherwise, if it is the occupant, the stall is vacated: it becomes
    ///    the recent leaver and the countdown is armed. Vacating does not
    ///    produce a label of its own.
    ///
    /// The reported label is the highest-precedence signal, see [`StateLabel`].
    pub fn classify(&mut self, current: &FrameObservation, previous: &FrameObservation) -> StateMap {
        let mut states = StateMap::new();

        if current.is_empty() {
            if self.config.decay_on_empty_frames {
                self.tick_leaver();
            }
            log::trace!("empty frame, occupant={:?} leaver={:?}", self.occupant, self.recent_leaver);
            return states;
        }

        let points = centroids(current.boxes());
        let prev_points = centroids(previous.boxes());
        let prev_rows: HashMap<TrackId, usize> = previous
            .ids()
            .iter()
            .enumerate()
            .map(|(row, &id)| (id, row))
            .collect();

        for (row, (id, rect)) in current.iter().enumerate() {
            let moved = prev_rows.get(&id).is_some_and(|&prev_row| {
                distance(points.row(row), prev_points.row(prev_row)) > MOTION_THRESHOLD
            });
            let recently_left = self.recent_leaver == Some(id);
            let arrived = rect.intersects(&self.config.monitored_region);

            if arrived {
                self.occupy(id);
            } else if self.occupant == Some(id) {
                self.vacate(id);
            }

            states.insert(id, StateLabel::resolve(moved, recently_left, arrived));

            if self.config.countdown == LeaverCountdown::PerObservation {
                self.tick_leaver();
            }
        }

        if self.config.countdown == LeaverCountdown::PerFrame {
            self.tick_leaver();
        }

        log::trace!(
            "classified {} objects, occupant={:?} leaver={:?} ttl={:?}",
            states.len(),
            self.occupant,
            self.recent_leaver,
            self.leaver_ttl
        );
        states
    }

    /// Validate raw tracker output for both frames, then [`classify`](Self::classify).
    ///
    /// Nothing is mutated when either frame is rejected.
    pub fn classify_parts(
        &mut self,
        boxes: &[Rect],
        ids: &[TrackId],
        prev_boxes: &[Rect],
        prev_ids: &[TrackId],
    ) -> Result<StateMap, Error> {
        let current = FrameObservation::new(boxes.to_vec(), ids.to_vec())
            .map_err(|e| Error::input(FrameRole::Current, e))?;
        let previous = FrameObservation::new(prev_boxes.to_vec(), prev_ids.to_vec())
            .map_err(|e| Error::input(FrameRole::Previous, e))?;
        Ok(self.classify(&current, &previous))
    }

    fn occupy(&mut self, id: TrackId) {
        match self.occupant {
            Some(current) if current == id => {}
            Some(current) => {
                log::warn!("identity {} displaces occupant {} of the stall", id, current);
                self.occupant = Some(id);
            }
            None => {
                log::debug!("identity {} arrived in the stall", id);
                self.occupant = Some(id);
            }
        }
    }

    fn vacate(&mut self, id: TrackId) {
        log::debug!(
            "identity {} left the stall, flagged for {} ticks",
            id,
            self.config.left_tracking_iterations
        );
        self.occupant = None;
        self.recent_leaver = Some(id);
        self.leaver_ttl = Some(self.config.left_tracking_iterations);
    }

    fn tick_leaver(&mut self) {
        match self.leaver_ttl {
            Some(0) => {
                if let Some(id) = self.recent_leaver.take() {
                    log::debug!("leaver {} expired", id);
                }
                self.leaver_ttl = None;
            }
            Some(n) => self.leaver_ttl = Some(n - 1),
            None => {}
        }
    }
}
