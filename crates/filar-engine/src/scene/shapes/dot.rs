use crate::coords::Point3;
use crate::scene::{Scene, Segment};

impl Scene {
    /// Appends a zero-length segment rendered as a filled disk.
    ///
    /// `radius` is in scene units and maps onto the segment's stroke
    /// multiplier: radius 0.1 gives `width_scale` 10.
    pub fn push_dot(&mut self, x: f64, y: f64, z: f64, radius: f64) {
        let p = Point3::new(x, y, z);
        let mut seg = Segment::new(p, p);
        seg.width_scale = radius * 100.0;
        self.push(seg);
    }
}
