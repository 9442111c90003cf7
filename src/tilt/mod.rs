//! Pointer tilt engine core - pure math and state, no DOM
//!
//! The pipeline per pointer move: normalize against fresh bounds,
//! map to a clamped transform + shadow, park the result in the single
//! pending-frame slot, and write it on the next render tick.

pub mod config;
pub mod driver;
pub mod shadow;
pub mod tier;
pub mod transform;
pub mod transition;

pub use config::TiltConfig;
pub use driver::{LeaveAction, MoveAction, TiltDriver, TiltFrame};
pub use shadow::TiltShadow;
pub use tier::EffectTier;
pub use transform::TiltTransform;
pub use transition::{SETTLE_MS, TransitionPhase};
