//! PointerOffset - pointer position normalized against element bounds
//!
//! Components are nominally in [-1, 1] but can exceed that range: move
//! events fire slightly past the border, and the tilt math clamps later.

use super::rect::Rect;

/// Pointer offset from an element's center, in half-extent units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub nx: f32,
    pub ny: f32,
}

impl PointerOffset {
    pub const CENTER: Self = Self { nx: 0.0, ny: 0.0 };

    pub const fn new(nx: f32, ny: f32) -> Self {
        Self { nx, ny }
    }

    /// Normalize a viewport-coordinate pointer against element bounds.
    /// Returns None for degenerate rects - no partial update on those.
    pub fn from_pointer(rect: &Rect, x: f32, y: f32) -> Option<Self> {
        if rect.is_degenerate() {
            return None;
        }
        let (cx, cy) = rect.center();
        Some(Self {
            nx: (x - cx) / (rect.width / 2.0),
            ny: (y - cy) / (rect.height / 2.0),
        })
    }

    /// Distance from center in half-extent units
    pub fn magnitude(&self) -> f32 {
        (self.nx * self.nx + self.ny * self.ny).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_at_center_is_zero() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let offset = PointerOffset::from_pointer(&rect, 200.0, 150.0).unwrap();
        assert_eq!(offset, PointerOffset::CENTER);
    }

    #[test]
    fn offset_at_corner() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let offset = PointerOffset::from_pointer(&rect, 300.0, 100.0).unwrap();
        assert_eq!(offset.nx, 1.0);
        assert_eq!(offset.ny, -1.0);
    }

    #[test]
    fn offset_outside_bounds_exceeds_unit_range() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let offset = PointerOffset::from_pointer(&rect, 200.0, 50.0).unwrap();
        assert_eq!(offset.nx, 3.0);
        assert_eq!(offset.ny, 0.0);
    }

    #[test]
    fn offset_degenerate_rect_is_none() {
        let rect = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert!(PointerOffset::from_pointer(&rect, 10.0, 10.0).is_none());
    }

    #[test]
    fn offset_magnitude() {
        let offset = PointerOffset::new(3.0, 4.0);
        assert!((offset.magnitude() - 5.0).abs() < 1e-6);
    }
}
