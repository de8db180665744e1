//! SVG-emitting drawing surface.

use std::fmt::Write;

use filar_engine::{Color, Surface};

/// Drawing surface that accumulates SVG elements.
///
/// Path commands build up a `d` attribute; `fill_path` flushes it as a
/// `<path>` element filled with the current color. Full-circle arcs are
/// expressed as two SVG arc commands so they stay inside the path model.
pub struct SvgSurface {
    width: f64,
    height: f64,
    fill: Color,
    path: String,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: Color::BLACK,
            path: String::new(),
            body: String::new(),
        }
    }

    /// Finishes the document, consuming the surface.
    pub fn into_document(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn fill_attr(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.fill.r, self.fill.g, self.fill.b)
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{x:.3}\" y=\"{y:.3}\" width=\"{w:.3}\" height=\"{h:.3}\" fill=\"{}\"/>",
            self.fill_attr(),
        );
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M {x:.3} {y:.3} ");
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "L {x:.3} {y:.3} ");
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        let _ = write!(self.path, "C {c1x:.3} {c1y:.3} {c2x:.3} {c2y:.3} {x:.3} {y:.3} ");
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        // Two half-circle arcs; a single SVG arc command cannot span 2π.
        let (left, right) = (x - radius, x + radius);
        let _ = write!(
            self.path,
            "M {right:.3} {y:.3} A {radius:.3} {radius:.3} 0 1 0 {left:.3} {y:.3} A {radius:.3} {radius:.3} 0 1 0 {right:.3} {y:.3} ",
        );
    }

    fn close_path(&mut self) {
        let _ = write!(self.path, "Z");
    }

    fn fill_path(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"{}\"/>",
            self.path.trim_end(),
            self.fill_attr(),
        );
        self.path.clear();
    }
}
