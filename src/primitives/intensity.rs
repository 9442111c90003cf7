//! Intensity - effect strength multiplier
//!
//! Scales every axis of a tilt at once. Typical configurations sit in
//! [0.4, 1.2]; the bounds leave headroom for experimentation.

use super::bounded::bounded_f32;

bounded_f32!(Intensity, 0.0, 2.0);

impl Intensity {
    pub const FULL: Self = Self::new(1.0);

    /// Strengths the portfolio element classes shipped with
    pub const CARD: Self = Self::new(1.2);
    pub const CHIP: Self = Self::new(1.0);
    pub const PORTRAIT: Self = Self::new(0.8);
    pub const BADGE: Self = Self::new(0.6);

    pub fn describe(&self) -> &'static str {
        match self.0 {
            x if x < 0.5 => "subtle",
            x if x < 0.9 => "light",
            x if x <= 1.1 => "standard",
            _ => "pronounced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_damping() {
        let damped = Intensity::CARD * 0.7;
        assert!((damped.value() - 0.84).abs() < 1e-6);
    }

    #[test]
    fn intensity_describe() {
        assert_eq!(Intensity::FULL.describe(), "standard");
        assert_eq!(Intensity::BADGE.describe(), "light");
        assert_eq!(Intensity::CARD.describe(), "pronounced");
    }
}
