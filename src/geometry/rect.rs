use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in image-pixel coordinates.
///
/// Stored in TLBR form (x1, y1, x2, y2). Constructors also accept:
/// - TLWH: Top-Left X, Top-Left Y, Width, Height
/// - XYWH: Center X, Center Y, Width, Height
///
/// Constructors do not validate; use [`Rect::is_well_formed`] before trusting
/// a box that came from outside the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left x coordinate
    pub x1: f32,
    /// Top-left y coordinate
    pub y1: f32,
    /// Bottom-right x coordinate
    pub x2: f32,
    /// Bottom-right y coordinate
    pub y2: f32,
}

impl Rect {
    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a Rect from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Create a Rect from XYWH format (center x, center y, width, height).
    #[inline]
    pub fn from_xywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x1: cx - width / 2.0,
            y1: cy - height / 2.0,
            x2: cx + width / 2.0,
            y2: cy + height / 2.0,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.x1, self.y1, self.width(), self.height()]
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Scale a box given in relative `[0, 1]` coordinates to pixel space.
    #[inline]
    pub fn scale(&self, width: f32, height: f32) -> Self {
        Self {
            x1: self.x1 * width,
            y1: self.y1 * height,
            x2: self.x2 * width,
            y2: self.y2 * height,
        }
    }

    /// True when all coordinates are finite and the corners are ordered.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.to_tlbr().iter().all(|v| v.is_finite()) && self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Whether the two boxes overlap on both axes.
    ///
    /// Partial overlap and containment count; boxes that only share an edge
    /// or a corner do not.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_conversions() {
        let rect = Rect::from_tlwh(10.0, 20.0, 30.0, 40.0);

        assert_eq!(rect.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(rect.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);
        assert_eq!(rect.center(), (25.0, 40.0));
    }

    #[test]
    fn test_from_xywh() {
        let rect = Rect::from_xywh(25.0, 40.0, 30.0, 40.0);
        assert_eq!(rect, Rect::new(10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn test_scale_relative() {
        let rect = Rect::new(0.25, 0.5, 0.75, 1.0).scale(640.0, 480.0);
        assert_eq!(rect, Rect::new(160.0, 240.0, 480.0, 480.0));
    }

    #[test]
    fn test_well_formed() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).is_well_formed());
        // Degenerate boxes are allowed.
        assert!(Rect::new(5.0, 5.0, 5.0, 5.0).is_well_formed());
        assert!(!Rect::new(10.0, 0.0, 0.0, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, 10.0, 10.0, 0.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f32::NAN, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 10.0).is_well_formed());
    }

    #[test]
    fn test_intersects_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_containment() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_intersects_edge_touching() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 20.0)));
        assert!(!a.intersects(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_intersects_no_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(20.0, 20.0, 30.0, 30.0)));
        // Overlap on one axis only.
        assert!(!a.intersects(&Rect::new(2.0, 20.0, 8.0, 30.0)));
    }
}
