/// 2D point in screen space (surface pixels, top-left origin, +y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point displaced `distance` along `angle` (radians).
    #[inline]
    pub fn offset(self, angle: f64, distance: f64) -> Point2 {
        Point2::new(self.x + angle.cos() * distance, self.y + angle.sin() * distance)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
