//! Screen-space quad construction and ring corner smoothing.
//!
//! A projected segment becomes four corners: `d1`/`d2` flank endpoint 1,
//! `d3`/`d4` flank endpoint 2, offset perpendicular to the segment by each
//! endpoint's half-width. The offset order reverses at the far end so the
//! outline `d1 → d2 → d3 → d4` winds consistently.

use core::f64::consts::FRAC_PI_2;

use crate::coords::Point2;

/// Corner set of one rasterized segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Quad {
    pub d1: Point2,
    pub d2: Point2,
    pub d3: Point2,
    pub d4: Point2,
}

/// Screen-space angle of the segment, measured from endpoint 2 toward
/// endpoint 1 (so offsetting along it extends past endpoint 1).
#[inline]
pub(crate) fn segment_angle(p1: Point2, p2: Point2) -> f64 {
    (p1.y - p2.y).atan2(p1.x - p2.x)
}

/// Builds the corner quad for a projected segment with per-endpoint full
/// stroke widths `w1` and `w2`. `angle` must be [`segment_angle`] of the
/// same endpoints.
pub(crate) fn corners(p1: Point2, p2: Point2, angle: f64, w1: f64, w2: f64) -> Quad {
    Quad {
        d1: p1.offset(angle - FRAC_PI_2, w1 / 2.0),
        d2: p1.offset(angle + FRAC_PI_2, w1 / 2.0),
        d3: p2.offset(angle + FRAC_PI_2, w2 / 2.0),
        d4: p2.offset(angle - FRAC_PI_2, w2 / 2.0),
    }
}

#[inline]
fn midpoint(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Smooths a ring by averaging the abutting corner pairs of every
/// consecutive member pair, including the wrap-around pair: the previous
/// member's `d4`/`d3` meet the next member's `d1`/`d2` at their midpoints,
/// so adjacent quads share an exact edge and the ring has no facet seams.
///
/// `members` lists the ring's segment indices in chain order; `quads` is
/// the pass-scoped side table indexed by segment index.
///
/// # Panics
///
/// Panics if any member has no cached quad. The caller fills the whole
/// ring before smoothing; a hole means the ring chain is malformed.
pub(crate) fn smooth_ring(quads: &mut [Option<Quad>], members: &[usize]) {
    for j in 0..members.len() {
        let prev = members[if j == 0 { members.len() - 1 } else { j - 1 }];
        let cur = members[j];

        let mut a = expect_quad(quads, prev);
        let mut b = expect_quad(quads, cur);

        let near = midpoint(b.d1, a.d4);
        let far = midpoint(b.d2, a.d3);
        b.d1 = near;
        a.d4 = near;
        b.d2 = far;
        a.d3 = far;

        quads[prev] = Some(a);
        quads[cur] = Some(b);
    }
}

fn expect_quad(quads: &[Option<Quad>], index: usize) -> Quad {
    match quads[index] {
        Some(q) => q,
        None => panic!("curve ring member {index} has no cached quad; ring chain is malformed"),
    }
}
