//! Demo binary: builds a small procedural scene, steps it through a few
//! frames of rotation the way a per-frame driver would, and writes the
//! final frame to `filar.svg`.

use std::fs;

use anyhow::Context;
use filar_engine::coords::Point3;
use filar_engine::logging::{LoggingConfig, init_logging};
use filar_engine::{Color, RenderOptions, Renderer, Scene};

mod svg;

use svg::SvgSurface;

const SURFACE_SIZE: f64 = 640.0;
const FRAMES: u32 = 120;

/// Rotation applied per frame, in radians (half a degree).
const STEP: f64 = core::f64::consts::PI / 360.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = Scene::new();

    scene.begin_group();
    scene.push_cuboid(Point3::new(-0.7, -0.7, -0.7), Point3::new(0.7, 0.7, 0.7));
    scene.colorize(Color::from_rgb_u32(0x2a6df4));
    scene.end_group()?;

    scene.begin_group();
    scene.push_circle(0.0, 0.0, 0.0, 0.45);
    scene.push_ellipse(0.0, 0.0, 0.3, 0.3, 0.18);
    scene.colorize(Color::from_rgb_u32(0xd84315));
    scene.end_group()?;

    for i in 0..8 {
        let angle = core::f64::consts::TAU / 8.0 * i as f64;
        scene.push_dot(angle.cos() * 0.95, angle.sin() * 0.95, 0.0, 0.03);
    }

    let mut renderer = Renderer::new();
    let options = RenderOptions::default();

    // Spin the whole scene, rendering every frame; only the last one is
    // kept for the output file.
    let mut document = String::new();
    for frame in 0..FRAMES {
        scene.rotate(STEP, STEP * 2.0, 0.0);

        let mut surface = SvgSurface::new(SURFACE_SIZE, SURFACE_SIZE);
        renderer.render(&scene, &mut surface, &options);
        if frame == FRAMES - 1 {
            document = surface.into_document();
        }
    }

    let out = "filar.svg";
    fs::write(out, document).with_context(|| format!("writing {out}"))?;
    log::info!("rendered {FRAMES} frames, wrote {out}");
    Ok(())
}
