use core::cmp::Ordering;

use crate::scene::Segment;

/// Back-to-front paint order for two segments.
///
/// Ordering rules:
/// 1) `min(p1.z, p2.z)`: descending; farther segments (greater z) paint
///    first and are overdrawn by nearer ones
/// 2) `min(p1.y, p2.y)`: ascending
/// 3) `min(p1.x, p2.x)`: ascending
///
/// Pure comparator; remaining ties are left to the (stable) sort.
pub fn paint_order(a: &Segment, b: &Segment) -> Ordering {
    let az = a.p1.z.min(a.p2.z);
    let bz = b.p1.z.min(b.p2.z);
    match bz.total_cmp(&az) {
        Ordering::Equal => {}
        o => return o,
    }

    let ay = a.p1.y.min(a.p2.y);
    let by = b.p1.y.min(b.p2.y);
    match ay.total_cmp(&by) {
        Ordering::Equal => {}
        o => return o,
    }

    let ax = a.p1.x.min(a.p2.x);
    let bx = b.p1.x.min(b.p2.x);
    ax.total_cmp(&bx)
}
