use core::f64::consts::TAU;

use crate::coords::Point3;
use crate::scene::{RingLinks, Scene, Segment};

/// Tessellation step count used by [`Scene::push_circle`] and
/// [`Scene::push_ellipse`]. One segment is produced per step.
pub const DEFAULT_RING_STEPS: u32 = 45;

impl Scene {
    /// Appends a circle in the z-plane as a smoothed ring of
    /// [`DEFAULT_RING_STEPS`] segments.
    #[inline]
    pub fn push_circle(&mut self, x: f64, y: f64, z: f64, radius: f64) {
        self.push_circle_steps(x, y, z, radius, DEFAULT_RING_STEPS);
    }

    /// [`push_circle`](Scene::push_circle) with an explicit step count.
    #[inline]
    pub fn push_circle_steps(&mut self, x: f64, y: f64, z: f64, radius: f64, steps: u32) {
        self.push_ring(x, y, z, radius, radius, steps);
    }

    /// Appends an axis-aligned ellipse in the z-plane as a smoothed ring
    /// of [`DEFAULT_RING_STEPS`] segments.
    #[inline]
    pub fn push_ellipse(&mut self, x: f64, y: f64, z: f64, radius_a: f64, radius_b: f64) {
        self.push_ellipse_steps(x, y, z, radius_a, radius_b, DEFAULT_RING_STEPS);
    }

    /// [`push_ellipse`](Scene::push_ellipse) with an explicit step count.
    #[inline]
    pub fn push_ellipse_steps(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        radius_a: f64,
        radius_b: f64,
        steps: u32,
    ) {
        self.push_ring(x, y, z, radius_a, radius_b, steps);
    }

    /// Tessellates one closed curve: `steps + 1` uniform angle samples
    /// over `[0, 2π]`, one segment per consecutive pair. The closing
    /// segment reuses the first sampled point exactly, so the loop is
    /// watertight regardless of floating-point drift at 2π.
    fn push_ring(&mut self, x: f64, y: f64, z: f64, radius_a: f64, radius_b: f64, steps: u32) {
        if steps == 0 {
            return;
        }

        let first = self.len();
        let mut first_sample = Point3::zero();
        let mut prev_sample = Point3::zero();

        for i in 0..=steps {
            let angle = TAU / steps as f64 * i as f64;
            let sample = Point3::new(x + angle.cos() * radius_a, y + angle.sin() * radius_b, z);

            if i == 0 {
                first_sample = sample;
            } else {
                let end = if i == steps { first_sample } else { sample };
                let mut seg = Segment::new(prev_sample, end);
                seg.suppress_caps = true;
                self.push(seg);
            }

            prev_sample = sample;
        }

        // Link the members into a chain that is cyclic in both directions.
        let last = self.len() - 1;
        let segments = self.segments_mut();
        for i in first..=last {
            segments[i].ring = Some(RingLinks {
                first,
                prev: if i == first { last } else { i - 1 },
                next: if i == last { first } else { i + 1 },
            });
        }
    }
}
