//! Geometry value types.
//!
//! Scope:
//! - scene-space points ([`Point3`]) and their bounding boxes ([`Bounds3`])
//! - screen-space points ([`Point2`])
//!
//! Color lives in `paint`, not here.

mod bounds;
mod point2;
mod point3;

pub use bounds::Bounds3;
pub use point2::Point2;
pub use point3::Point3;
