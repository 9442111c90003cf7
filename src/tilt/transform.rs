//! TiltTransform - the pseudo-3D card transform for one pointer position
//!
//! Recomputed on every move; never stored beyond the pending frame slot.

use crate::primitives::PointerOffset;
use super::config::TiltConfig;

/// Rotation, translation and depth for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_x_px: f32,
    pub translate_y_px: f32,
    pub depth_px: f32,
}

impl TiltTransform {
    /// Resting transform written on pointer-leave
    pub const NEUTRAL: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        translate_x_px: 0.0,
        translate_y_px: 0.0,
        depth_px: 0.0,
    };

    /// Map a normalized pointer offset to a tilt.
    ///
    /// The X rotation is inverted so moving the pointer up tilts the far
    /// edge away, like pressing on a physical card. All axes clamp to the
    /// configured limits even when the offset leaves the unit range.
    pub fn compute(offset: PointerOffset, config: &TiltConfig) -> Self {
        let strength = config.intensity.value();
        let max_r = config.max_rotation_deg;
        let max_t = config.max_translation_px;

        Self {
            rotate_x_deg: (offset.ny * max_r * -strength).clamp(-max_r, max_r),
            rotate_y_deg: (offset.nx * max_r * strength).clamp(-max_r, max_r),
            translate_x_px: (offset.nx * max_t * strength).clamp(-max_t, max_t),
            translate_y_px: (offset.ny * max_t * strength).clamp(-max_t, max_t),
            depth_px: config.depth(),
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// The full CSS transform chain, written in one batch with the shadow
    pub fn to_css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) \
             translateX({:.2}px) translateY({:.2}px) translateZ({:.2}px)",
            self.rotate_x_deg,
            self.rotate_y_deg,
            self.translate_x_px,
            self.translate_y_px,
            self.depth_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Intensity, Rect};

    fn reference_config() -> TiltConfig {
        TiltConfig {
            intensity: Intensity::FULL,
            max_rotation_deg: 18.0,
            max_translation_px: 5.0,
            base_depth_px: 15.0,
        }
    }

    #[test]
    fn transform_zero_at_dead_center() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let offset = PointerOffset::from_pointer(&rect, 200.0, 150.0).unwrap();
        let t = TiltTransform::compute(offset, &reference_config());
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.translate_x_px, 0.0);
        assert_eq!(t.translate_y_px, 0.0);
    }

    #[test]
    fn transform_top_right_corner() {
        // nx = 1, ny = -1: both rotations land at the positive limit
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let offset = PointerOffset::from_pointer(&rect, 300.0, 100.0).unwrap();
        let t = TiltTransform::compute(offset, &reference_config());
        assert!((t.rotate_x_deg - 18.0).abs() < 1e-4);
        assert!((t.rotate_y_deg - 18.0).abs() < 1e-4);
    }

    #[test]
    fn transform_clamps_far_outside_bounds() {
        let config = reference_config();
        let offset = PointerOffset::new(50.0, -50.0);
        let t = TiltTransform::compute(offset, &config);
        assert!(t.rotate_x_deg.abs() <= config.max_rotation_deg);
        assert!(t.rotate_y_deg.abs() <= config.max_rotation_deg);
        assert!(t.translate_x_px.abs() <= config.max_translation_px);
        assert!(t.translate_y_px.abs() <= config.max_translation_px);
    }

    #[test]
    fn transform_inverts_vertical_axis() {
        // Pointer above center (ny < 0) tilts the top edge away (rotateX > 0)
        let offset = PointerOffset::new(0.0, -0.5);
        let t = TiltTransform::compute(offset, &reference_config());
        assert!(t.rotate_x_deg > 0.0);
    }

    #[test]
    fn transform_depth_is_pointer_independent() {
        let config = reference_config();
        let near = TiltTransform::compute(PointerOffset::new(0.1, 0.1), &config);
        let far = TiltTransform::compute(PointerOffset::new(0.9, -0.9), &config);
        assert_eq!(near.depth_px, far.depth_px);
        assert_eq!(near.depth_px, config.depth());
    }

    #[test]
    fn transform_css_neutral() {
        let css = TiltTransform::NEUTRAL.to_css();
        assert!(css.starts_with("perspective(1000px)"));
        assert!(css.contains("rotateX(0.00deg)"));
        assert!(css.contains("translateZ(0.00px)"));
    }

    #[test]
    fn transform_css_formats_axes() {
        let t = TiltTransform {
            rotate_x_deg: 12.5,
            rotate_y_deg: -7.25,
            translate_x_px: 3.0,
            translate_y_px: -2.0,
            depth_px: 18.0,
        };
        let css = t.to_css();
        assert!(css.contains("rotateX(12.50deg)"));
        assert!(css.contains("rotateY(-7.25deg)"));
        assert!(css.contains("translateZ(18.00px)"));
    }
}
