//! Render pipeline: depth sort → pinhole projection → quad rasterization.
//!
//! The renderer consumes a [`Scene`](crate::scene::Scene) and issues fill
//! commands to a caller-provided [`Surface`] in back-to-front paint order.
//!
//! Convention:
//! - scene space is right-handed, +y up, +z away from the viewer
//! - screen space is surface pixels, top-left origin, +y down
//! - the surface is a sequential command sink; commands arrive in the
//!   exact order the pass determines

mod project;
mod quad;
mod raster;
mod sort;
mod surface;

pub use raster::{RenderOptions, Renderer};
pub use surface::Surface;
