//! Paint model.
//!
//! Scope:
//! - opaque stroke/fill color
//!
//! Intentionally minimal: strokes are filled with a single solid color and
//! the renderer batches surface state by comparing colors for equality, so
//! [`Color`] stays `Eq + Hash`. Extend by widening `Color`, not by adding a
//! paint enum, unless a renderer actually dispatches on paint kind.

mod color;

pub use color::Color;
