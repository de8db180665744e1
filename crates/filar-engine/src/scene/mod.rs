//! Scene (segment store) types and operations.
//!
//! Responsibilities:
//! - store the ordered 3D line-segment model
//! - scope transform/color operations to a suffix via a begin/end group stack
//! - keep primitive builders isolated per shape file under `scene::shapes`
//!
//! Transforms mutate segments in place between render passes; rendering
//! itself never changes the scene.

mod segment;
mod store;
mod transform;

pub mod shapes;

pub use segment::{RingLinks, Segment};
pub use shapes::DEFAULT_RING_STEPS;
pub use store::Scene;
