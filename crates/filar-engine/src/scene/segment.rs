use crate::coords::Point3;
use crate::paint::Color;

/// Links tying a segment into a tessellated curve ring.
///
/// Values are indices into the owning scene's segment storage, not owning
/// references. The chain is cyclic in both directions: following `next`
/// N times around an N-member ring returns to the starting member, and
/// `prev` of the first-created member is the last-created one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RingLinks {
    /// First-created member of the ring.
    pub first: usize,
    /// Previous member (the last member, on the first one).
    pub prev: usize,
    /// Next member (the first member, on the last one).
    pub next: usize,
}

/// A single 3D line segment, the atomic scene entity.
///
/// Segments are created by the primitive builders (`scene::shapes`),
/// mutated in place by the transform operations, and never individually
/// removed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub p1: Point3,
    pub p2: Point3,
    pub color: Color,
    /// Per-segment stroke-width multiplier.
    pub width_scale: f64,
    /// Interior to a closed curve: the rasterized quad gets straight end
    /// edges instead of rounded caps (the neighbor's quad abuts it).
    pub suppress_caps: bool,
    /// Curve-ring membership. `None` for ordinary segments.
    pub ring: Option<RingLinks>,
}

impl Segment {
    /// A default segment: black, unit width, caps enabled, not in a ring.
    #[inline]
    pub fn new(p1: Point3, p2: Point3) -> Self {
        Self {
            p1,
            p2,
            color: Color::BLACK,
            width_scale: 1.0,
            suppress_caps: false,
            ring: None,
        }
    }
}
