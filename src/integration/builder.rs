//! Builder for creating FrameObservation objects from various box formats.

use crate::geometry::Rect;
use crate::qualifier::{FrameObservation, InputError, TrackId};

/// Builder for creating a `FrameObservation` one track at a time.
#[derive(Debug, Clone, Default)]
pub struct ObservationBuilder {
    boxes: Vec<Rect>,
    ids: Vec<TrackId>,
    scale: Option<(f32, f32)>,
}

impl ObservationBuilder {
    /// Create a new observation builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track with its box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(self, id: TrackId, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.rect(id, Rect::new(x1, y1, x2, y2))
    }

    /// Add a track with its box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(self, id: TrackId, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.rect(id, Rect::from_xywh(cx, cy, w, h))
    }

    /// Add a track with its box in TLWH format (left, top, width, height).
    pub fn tlwh(self, id: TrackId, l: f32, t: f32, w: f32, h: f32) -> Self {
        self.rect(id, Rect::from_tlwh(l, t, w, h))
    }

    /// Add a track with an existing `Rect`.
    pub fn rect(mut self, id: TrackId, rect: Rect) -> Self {
        self.boxes.push(rect);
        self.ids.push(id);
        self
    }

    /// Treat every box as relative `[0, 1]` coordinates of a `width` x `height`
    /// image and scale it to pixels on build.
    pub fn scale(mut self, width: f32, height: f32) -> Self {
        self.scale = Some((width, height));
        self
    }

    /// Build the final `FrameObservation`.
    pub fn build(self) -> Result<FrameObservation, InputError> {
        let boxes = match self.scale {
            Some((w, h)) => self.boxes.iter().map(|r| r.scale(w, h)).collect(),
            None => self.boxes,
        };
        FrameObservation::new(boxes, self.ids)
    }
}
