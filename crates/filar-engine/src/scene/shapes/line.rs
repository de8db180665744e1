use crate::coords::Point3;
use crate::scene::{Scene, Segment};

impl Scene {
    /// Appends a single straight segment with default color and width.
    #[inline]
    pub fn push_line(&mut self, x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) {
        self.push(Segment::new(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2)));
    }
}
