//! EffectTier - how much motion a device gets
//!
//! Replaces the old user-agent sniffing ladder: the tier is decided from
//! media queries (reduced motion, coarse pointer), never from browser
//! names. Static targets get a fixed hover pose instead of tracking.

use super::config::TiltConfig;

/// Intensity multiplier for coarse-pointer devices
pub const REDUCED_DAMP: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTier {
    /// Pointer-tracked tilt at full strength
    Full,
    /// Pointer-tracked tilt with damped intensity
    Reduced,
    /// No tracking; a fixed hover transform only
    Static,
}

impl EffectTier {
    /// The config a target should actually run with, or None when the
    /// tier replaces tracking entirely.
    pub fn tracking_config(&self, config: TiltConfig) -> Option<TiltConfig> {
        match self {
            Self::Full => Some(config),
            Self::Reduced => Some(config.damped(REDUCED_DAMP)),
            Self::Static => None,
        }
    }

    /// Fixed hover pose for static targets, shaped by the same config
    /// the target would have tracked with.
    pub fn static_hover_css(config: &TiltConfig) -> String {
        let rot = config.max_rotation_deg / 3.0;
        format!(
            "perspective(600px) rotateX({:.0}deg) rotateY({:.0}deg) translateZ({:.0}px)",
            -rot,
            rot,
            config.depth(),
        )
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Full => "full motion",
            Self::Reduced => "reduced motion",
            Self::Static => "static hover",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_tier_passes_config_through() {
        let config = TiltConfig::CARD;
        assert_eq!(EffectTier::Full.tracking_config(config), Some(config));
    }

    #[test]
    fn reduced_tier_damps_intensity() {
        let config = EffectTier::Reduced.tracking_config(TiltConfig::CARD).unwrap();
        assert!((config.intensity.value() - 0.84).abs() < 1e-6);
    }

    #[test]
    fn static_tier_disables_tracking() {
        assert_eq!(EffectTier::Static.tracking_config(TiltConfig::CARD), None);
    }

    #[test]
    fn static_hover_pose_uses_config_depth() {
        let css = EffectTier::static_hover_css(&TiltConfig::CARD);
        assert!(css.contains("rotateX(-5deg)"));
        assert!(css.contains("rotateY(5deg)"));
        assert!(css.contains("translateZ(18px)"));
    }
}
