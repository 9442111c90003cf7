//! TiltShadow - drop shadow tracking the tilt direction
//!
//! The shadow falls opposite the lifted edge and spreads with distance
//! from center, selling the depth illusion.

use crate::primitives::PointerOffset;

/// Box-shadow parameters derived from the pointer offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
}

impl TiltShadow {
    pub fn compute(offset: PointerOffset) -> Self {
        Self {
            offset_x: (offset.nx * 15.0).clamp(-20.0, 20.0),
            offset_y: (8.0 + offset.ny * 8.0).clamp(8.0, 30.0),
            blur: 15.0 + offset.magnitude() * 10.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "{:.1}px {:.1}px {:.1}px rgba(0, 0, 0, 0.3)",
            self.offset_x, self.offset_y, self.blur,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_at_center() {
        let s = TiltShadow::compute(PointerOffset::CENTER);
        assert_eq!(s.offset_x, 0.0);
        assert_eq!(s.offset_y, 8.0);
        assert_eq!(s.blur, 15.0);
    }

    #[test]
    fn shadow_clamps_horizontal() {
        let s = TiltShadow::compute(PointerOffset::new(10.0, 0.0));
        assert_eq!(s.offset_x, 20.0);
        let s = TiltShadow::compute(PointerOffset::new(-10.0, 0.0));
        assert_eq!(s.offset_x, -20.0);
    }

    #[test]
    fn shadow_vertical_floor() {
        // Pointer above center still keeps the shadow below the card
        let s = TiltShadow::compute(PointerOffset::new(0.0, -1.0));
        assert_eq!(s.offset_y, 8.0);
        let s = TiltShadow::compute(PointerOffset::new(0.0, 5.0));
        assert_eq!(s.offset_y, 30.0);
    }

    #[test]
    fn shadow_blur_grows_with_distance() {
        let near = TiltShadow::compute(PointerOffset::new(0.1, 0.0));
        let far = TiltShadow::compute(PointerOffset::new(1.0, 1.0));
        assert!(far.blur > near.blur);
        assert!((far.blur - (15.0 + 2.0f32.sqrt() * 10.0)).abs() < 1e-4);
    }

    #[test]
    fn shadow_css() {
        let s = TiltShadow {
            offset_x: 15.0,
            offset_y: 16.0,
            blur: 25.0,
        };
        assert_eq!(s.to_css(), "15.0px 16.0px 25.0px rgba(0, 0, 0, 0.3)");
    }
}
