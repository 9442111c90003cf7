//! Bounded - macro for range-constrained numeric types
//!
//! Generates f32 newtypes with compile-time validation in const contexts.
//! Arithmetic clamps to bounds instead of panicking.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Intensity, 0.0, 2.0);
/// let i = Intensity::new(1.2);
/// let damped = i * 0.7;  // Intensity(0.84)
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub fn clamped(value: f32) -> Self {
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }

            /// Ratio within the range [0.0, 1.0]
            pub const fn ratio(&self) -> f32 {
                (self.0 - Self::MIN) / (Self::MAX - Self::MIN)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self::Output {
                Self::clamped(self.0 * rhs)
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestNorm, 0.0, 1.0);

    const HALF: TestNorm = TestNorm::new(0.5);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(HALF.value(), 0.5);
        assert_eq!(HALF.ratio(), 0.5);
    }

    #[test]
    fn bounded_clamps_on_mul() {
        let n = TestNorm::new(0.8);
        assert_eq!((n * 2.0).value(), 1.0);
    }

    #[test]
    fn bounded_clamped_constructor() {
        assert_eq!(TestNorm::clamped(-3.0).value(), 0.0);
        assert_eq!(TestNorm::clamped(7.0).value(), 1.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestNorm::new(1.5);
    }
}
