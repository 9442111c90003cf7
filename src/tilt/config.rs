//! TiltConfig - bind-time tuning for one target
//!
//! The source material never agreed on constants (rotation limits of 8,
//! 12, and 15 degrees across element classes), so everything is
//! configuration with presets for the classes that actually shipped.

use crate::primitives::Intensity;

/// Per-target tilt tuning, fixed at bind time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    pub intensity: Intensity,
    pub max_rotation_deg: f32,
    pub max_translation_px: f32,
    pub base_depth_px: f32,
}

impl TiltConfig {
    /// Project cards - the strongest effect on the page
    pub const CARD: Self = Self {
        intensity: Intensity::CARD,
        max_rotation_deg: 15.0,
        max_translation_px: 5.0,
        base_depth_px: 15.0,
    };

    /// Tech stack chips
    pub const CHIP: Self = Self {
        intensity: Intensity::CHIP,
        max_rotation_deg: 12.0,
        max_translation_px: 8.0,
        base_depth_px: 15.0,
    };

    /// The profile card - large element, lighter touch
    pub const PORTRAIT: Self = Self {
        intensity: Intensity::PORTRAIT,
        max_rotation_deg: 15.0,
        max_translation_px: 5.0,
        base_depth_px: 15.0,
    };

    /// Social link badges - barely-there tilt
    pub const BADGE: Self = Self {
        intensity: Intensity::BADGE,
        max_rotation_deg: 8.0,
        max_translation_px: 5.0,
        base_depth_px: 10.0,
    };

    /// All presets, for sampling and lookup by name
    pub const PRESETS: &[(&'static str, Self)] = &[
        ("card", Self::CARD),
        ("chip", Self::CHIP),
        ("portrait", Self::PORTRAIT),
        ("badge", Self::BADGE),
    ];

    pub fn by_name(name: &str) -> Option<Self> {
        Self::PRESETS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    /// Z-axis push applied while hovered; constant per move
    pub fn depth(&self) -> f32 {
        self.base_depth_px * self.intensity.value()
    }

    /// Same shape, weaker - for coarse-pointer devices
    pub fn damped(self, factor: f32) -> Self {
        Self {
            intensity: self.intensity * factor,
            ..self
        }
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            intensity: Intensity::FULL,
            max_rotation_deg: 15.0,
            max_translation_px: 5.0,
            base_depth_px: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_depth_scales_with_intensity() {
        assert!((TiltConfig::CARD.depth() - 18.0).abs() < 1e-4);
        assert!((TiltConfig::BADGE.depth() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn config_damped_keeps_limits() {
        let damped = TiltConfig::CARD.damped(0.7);
        assert!((damped.intensity.value() - 0.84).abs() < 1e-6);
        assert_eq!(damped.max_rotation_deg, TiltConfig::CARD.max_rotation_deg);
    }

    #[test]
    fn config_lookup_by_name() {
        assert_eq!(TiltConfig::by_name("chip"), Some(TiltConfig::CHIP));
        assert_eq!(TiltConfig::by_name("banner"), None);
    }
}
