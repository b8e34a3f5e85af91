//! Per-frame tracker output.

use std::collections::HashSet;

use crate::geometry::Rect;
use crate::qualifier::error::InputError;

/// Identity assigned by the upstream tracker.
pub type TrackId = u64;

/// Boxes and identities of the objects visible in one frame.
///
/// `ids()[i]` owns `boxes()[i]`. An observation can only be built through
/// [`FrameObservation::new`], so every instance has equal-length sequences,
/// well-formed boxes and unique identities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameObservation {
    boxes: Vec<Rect>,
    ids: Vec<TrackId>,
}

impl FrameObservation {
    pub fn new(boxes: Vec<Rect>, ids: Vec<TrackId>) -> Result<Self, InputError> {
        if boxes.len() != ids.len() {
            return Err(InputError::LengthMismatch {
                boxes: boxes.len(),
                ids: ids.len(),
            });
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for (rect, &id) in boxes.iter().zip(&ids) {
            if !rect.is_well_formed() {
                return Err(InputError::MalformedBox { id, rect: *rect });
            }
            if !seen.insert(id) {
                return Err(InputError::DuplicateIdentity(id));
            }
        }

        Ok(Self { boxes, ids })
    }

    /// A frame with no visible objects.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn boxes(&self) -> &[Rect] {
        &self.boxes
    }

    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(id, box)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (TrackId, &Rect)> {
        self.ids.iter().copied().zip(self.boxes.iter())
    }

    /// Box of the given identity, if visible in this frame.
    pub fn get(&self, id: TrackId) -> Option<&Rect> {
        self.ids
            .iter()
            .position(|&other| other == id)
            .map(|idx| &self.boxes[idx])
    }
}
