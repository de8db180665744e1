//! Pinhole projection from scene space to screen space.

use crate::coords::{Point2, Point3};

/// Focal length for a surface of the given dimensions.
#[inline]
pub(crate) fn focal_length(width: f64, height: f64) -> f64 {
    width.min(height) / 2.0
}

/// Projects a scene point to screen coordinates.
///
/// The scene origin maps to the surface center and the z = 0 plane sits
/// one focal length in front of the lens. Scene +y is screen up, so the
/// vertical axis flips. A point on the lens plane (denominator zero) is
/// clamped to the smallest positive denominator instead of dividing by
/// zero.
pub(crate) fn project(p: Point3, width: f64, height: f64, focal: f64, scale: f64) -> Point2 {
    let x = p.x * scale * focal;
    let y = p.y * scale * focal;
    let z = p.z * scale * focal;

    let mut zz = z + focal;
    if zz == 0.0 {
        zz = f64::MIN_POSITIVE;
    }

    Point2::new(x * (focal / zz) + width / 2.0, -(y * (focal / zz) - height / 2.0))
}

/// Full stroke width for a segment endpoint at depth `z`.
///
/// Shrinks linearly as z grows away from the viewer; callers multiply by
/// the per-pass stroke factor and the segment's own width multiplier.
#[inline]
pub(crate) fn stroke_width_at(z: f64, focal: f64) -> f64 {
    ((-z + 1.0) / 2.0) * focal * 0.04
}
