//! TransitionPhase - the two easing regimes a target moves between
//!
//! While the pointer tracks, transitions stay short so writes feel
//! immediate. On leave, a longer overshoot curve springs the card back.

/// How long the settle animation runs; the shadow clears after this
pub const SETTLE_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Pointer is over the target; ~100ms ease so tracking feels live
    Tracking,
    /// Pointer left; spring back to neutral over ~400ms
    Settling,
}

impl TransitionPhase {
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Tracking => "transform 0.1s ease-out, box-shadow 0.1s ease-out",
            Self::Settling => {
                "transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1), box-shadow 0.4s ease-out"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_is_short() {
        assert!(TransitionPhase::Tracking.to_css().contains("0.1s"));
    }

    #[test]
    fn settling_springs() {
        let css = TransitionPhase::Settling.to_css();
        assert!(css.contains("cubic-bezier"));
        assert!(css.contains("0.4s"));
    }
}
