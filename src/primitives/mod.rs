//! Geometry and strength primitives shared by the tilt engine
//!
//! Each primitive is plain data with no DOM dependency, so the engine
//! core stays testable on the host.

#[macro_use]
pub mod bounded;
pub mod intensity;
pub mod offset;
pub mod rect;

pub use intensity::Intensity;
pub use offset::PointerOffset;
pub use rect::Rect;
