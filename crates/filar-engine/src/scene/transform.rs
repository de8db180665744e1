//! In-place affine operations over the scoped segment range.

use crate::coords::{Bounds3, Point3};
use crate::paint::Color;

use super::Scene;

impl Scene {
    /// Rotates the scoped segments about the X, then the Y, then the Z
    /// axis. Angles are radians; a zero angle skips its axis pass.
    pub fn rotate(&mut self, rx: f64, ry: f64, rz: f64) {
        for seg in self.scoped_segments_mut() {
            if rx != 0.0 {
                seg.p1 = rotate_x(seg.p1, rx);
                seg.p2 = rotate_x(seg.p2, rx);
            }
            if ry != 0.0 {
                seg.p1 = rotate_y(seg.p1, ry);
                seg.p2 = rotate_y(seg.p2, ry);
            }
            if rz != 0.0 {
                seg.p1 = rotate_z(seg.p1, rz);
                seg.p2 = rotate_z(seg.p2, rz);
            }
        }
    }

    /// Offsets every scoped segment by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        let delta = Point3::new(dx, dy, dz);
        for seg in self.scoped_segments_mut() {
            seg.p1 = seg.p1 + delta;
            seg.p2 = seg.p2 + delta;
        }
    }

    /// Scales every scoped segment component-wise about the origin.
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        for seg in self.scoped_segments_mut() {
            seg.p1 = Point3::new(seg.p1.x * sx, seg.p1.y * sy, seg.p1.z * sz);
            seg.p2 = Point3::new(seg.p2.x * sx, seg.p2.y * sy, seg.p2.z * sz);
        }
    }

    /// Sets the stroke color of every scoped segment.
    pub fn colorize(&mut self, color: Color) {
        for seg in self.scoped_segments_mut() {
            seg.color = color;
        }
    }

    /// Translates the scoped segments so their bounding box is centered on
    /// the origin. No-op when the scope is empty. Segments outside the
    /// scope are untouched.
    pub fn center(&mut self) {
        let scoped = self.scoped_segments();
        if scoped.is_empty() {
            return;
        }

        let mut bounds = Bounds3::empty();
        for seg in scoped {
            bounds.expand(seg.p1);
            bounds.expand(seg.p2);
        }

        let c = bounds.center();
        self.translate(-c.x, -c.y, -c.z);
    }
}

fn rotate_x(p: Point3, q: f64) -> Point3 {
    let (sin, cos) = q.sin_cos();
    Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

fn rotate_y(p: Point3, q: f64) -> Point3 {
    let (sin, cos) = q.sin_cos();
    Point3::new(p.z * sin + p.x * cos, p.y, p.z * cos - p.x * sin)
}

fn rotate_z(p: Point3, q: f64) -> Point3 {
    let (sin, cos) = q.sin_cos();
    Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}
