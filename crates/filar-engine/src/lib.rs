//! Filar engine crate.
//!
//! A scene is an ordered list of 3D line segments, built from primitive
//! shapes (lines, boxes, dots, circles, ellipses) and mutated in place by
//! stack-scoped affine transforms. Each render pass depth-sorts the
//! segments, projects them through a pinhole camera, and fills each one as
//! a tapered quadrilateral on a caller-provided [`render::Surface`].
//!
//! # Quick start
//!
//! ```no_run
//! use filar_engine::{Renderer, RenderOptions, Scene};
//! # struct Canvas;
//! # impl filar_engine::Surface for Canvas {
//! #     fn width(&self) -> f64 { 0.0 }
//! #     fn height(&self) -> f64 { 0.0 }
//! #     fn set_fill_color(&mut self, _: filar_engine::Color) {}
//! #     fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {}
//! #     fn begin_path(&mut self) {}
//! #     fn move_to(&mut self, _: f64, _: f64) {}
//! #     fn line_to(&mut self, _: f64, _: f64) {}
//! #     fn cubic_to(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64) {}
//! #     fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {}
//! #     fn close_path(&mut self) {}
//! #     fn fill_path(&mut self) {}
//! # }
//! # let mut canvas = Canvas;
//! let mut scene = Scene::new();
//! scene.push_circle(0.0, 0.0, 0.0, 0.75);
//! scene.rotate(0.2, 0.4, 0.0);
//!
//! let mut renderer = Renderer::new();
//! renderer.render(&scene, &mut canvas, &RenderOptions::default());
//! ```

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use error::ScopeUnderflow;
pub use paint::Color;
pub use render::{RenderOptions, Renderer, Surface};
pub use scene::{Scene, Segment};
