use crate::coords::Point3;
use crate::scene::Scene;

impl Scene {
    /// Appends the 12 edges of the axis-aligned box spanned by `min` and
    /// `max`: the 4 edges of each z-face plus the 4 connecting edges.
    pub fn push_cuboid(&mut self, min: Point3, max: Point3) {
        // near z face
        self.push_line(min.x, max.y, min.z, max.x, max.y, min.z);
        self.push_line(max.x, max.y, min.z, max.x, min.y, min.z);
        self.push_line(max.x, min.y, min.z, min.x, min.y, min.z);
        self.push_line(min.x, min.y, min.z, min.x, max.y, min.z);
        // far z face
        self.push_line(min.x, max.y, max.z, max.x, max.y, max.z);
        self.push_line(max.x, max.y, max.z, max.x, min.y, max.z);
        self.push_line(max.x, min.y, max.z, min.x, min.y, max.z);
        self.push_line(min.x, min.y, max.z, min.x, max.y, max.z);
        // edges between the faces
        self.push_line(min.x, max.y, min.z, min.x, max.y, max.z);
        self.push_line(max.x, max.y, min.z, max.x, max.y, max.z);
        self.push_line(max.x, min.y, min.z, max.x, min.y, max.z);
        self.push_line(min.x, min.y, min.z, min.x, min.y, max.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_is_twelve_segments() {
        let mut scene = Scene::new();
        scene.push_cuboid(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(scene.len(), 12);
    }

    #[test]
    fn cuboid_edges_stay_on_the_box() {
        let min = Point3::new(-2.0, -1.0, 0.0);
        let max = Point3::new(2.0, 1.0, 3.0);

        let mut scene = Scene::new();
        scene.push_cuboid(min, max);

        for seg in scene.segments() {
            for p in [seg.p1, seg.p2] {
                assert!(p.x == min.x || p.x == max.x);
                assert!(p.y == min.y || p.y == max.y);
                assert!(p.z == min.z || p.z == max.z);
            }
            // Every edge is axis-aligned: exactly one coordinate varies.
            let varies = [seg.p1.x != seg.p2.x, seg.p1.y != seg.p2.y, seg.p1.z != seg.p2.z];
            assert_eq!(varies.iter().filter(|&&v| v).count(), 1);
        }
    }
}
