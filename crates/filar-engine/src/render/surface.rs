use crate::paint::Color;

/// Drawing-surface capability consumed by the renderer.
///
/// The renderer drives an implementation with solid-color state, rectangle
/// fills, and filled paths built from move/line/cubic segments and circular
/// arcs. What the commands mean is up to the implementation: an immediate-
/// mode canvas, an SVG writer, a command recorder in tests.
///
/// Path commands always arrive bracketed: `begin_path`, then segment
/// commands, then `close_path` and `fill_path`. The fill color in effect is
/// whatever `set_fill_color` last installed.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f64;
    /// Surface height in pixels.
    fn height(&self) -> f64;

    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    /// Appends a circular arc centered at `(x, y)`; angles are radians.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);
    fn fill_path(&mut self);
}
