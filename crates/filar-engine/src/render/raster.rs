//! Rasterization pass: paint-order walk, cap handling, fill emission.

use core::f64::consts::TAU;
use std::collections::{HashMap, HashSet};

use crate::coords::{Point2, Point3};
use crate::paint::Color;
use crate::scene::{Scene, Segment};

use super::project::{focal_length, project, stroke_width_at};
use super::quad::{self, Quad};
use super::sort::paint_order;
use super::surface::Surface;

/// Per-pass rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Global scene-to-screen scale factor.
    pub scale: f64,
    /// Multiplier applied to every stroke width.
    pub stroke_width: f64,
    /// Fill for the whole surface before drawing; `None` skips the clear.
    pub background: Option<Color>,
}

impl Default for RenderOptions {
    #[inline]
    fn default() -> Self {
        Self {
            scale: 1.0,
            stroke_width: 1.0,
            background: Some(Color::WHITE),
        }
    }
}

/// Cap control points sit this fraction of the stroke width beyond the
/// flanking corners, a cubic approximation of a semicircular cap.
const CUBIC_CORNER: f64 = 2.0 / 3.0;

/// Caps narrower than this many pixels are dropped; a straight edge is
/// indistinguishable at that size.
const MIN_CAP_WIDTH: f64 = 2.0;

/// Sub-pixel offset applied to emitted ring-quad corners so abutting
/// fills overlap at shared edges instead of leaving hairline seams.
const SEAM_NUDGE: f64 = 1.0 / 1024.0;

/// Bit-exact endpoint identity; keys the per-color cap de-duplication set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct CapKey {
    x: u64,
    y: u64,
    z: u64,
}

impl CapKey {
    #[inline]
    fn new(p: Point2, z: f64) -> Self {
        Self {
            x: p.x.to_bits(),
            y: p.y.to_bits(),
            z: z.to_bits(),
        }
    }
}

/// Fixed projection context for one pass (surface geometry + options).
#[derive(Debug, Copy, Clone)]
struct PassCtx {
    width: f64,
    height: f64,
    focal: f64,
    scale: f64,
    stroke_factor: f64,
}

impl PassCtx {
    #[inline]
    fn project(&self, p: Point3) -> Point2 {
        project(p, self.width, self.height, self.focal, self.scale)
    }

    /// Full stroke width for an endpoint at depth `z` of a segment with
    /// the given width multiplier.
    #[inline]
    fn stroke_width(&self, z: f64, width_scale: f64) -> f64 {
        stroke_width_at(z, self.focal) * self.stroke_factor * width_scale
    }
}

/// Depth-sorting, projecting, rasterizing pass over a [`Scene`].
///
/// Owns the reusable pass buffers (sort order, quad side table, per-color
/// cap sets); keep one around and call [`render`](Renderer::render) once
/// per frame. All per-pass state is rebuilt at the start of each call, so
/// a renderer can move freely between scenes.
#[derive(Debug, Default)]
pub struct Renderer {
    order: Vec<usize>,
    quads: Vec<Option<Quad>>,
    caps: HashMap<Color, HashSet<CapKey>>,
    ring_walk: Vec<usize>,
}

impl Renderer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the scene onto `surface`, back to front.
    ///
    /// The scene is not modified; segment order is resolved through an
    /// internal index buffer so ring links stay valid.
    ///
    /// # Panics
    ///
    /// Panics if a curve ring is malformed: its chain does not cycle, or a
    /// member cannot produce a drawable quad before corner smoothing.
    pub fn render<S: Surface>(&mut self, scene: &Scene, surface: &mut S, options: &RenderOptions) {
        let width = surface.width();
        let height = surface.height();
        let ctx = PassCtx {
            width,
            height,
            focal: focal_length(width, height),
            scale: options.scale,
            stroke_factor: options.stroke_width,
        };
        let segments = scene.segments();

        self.order.clear();
        self.order.extend(0..segments.len());
        self.order.sort_by(|&a, &b| paint_order(&segments[a], &segments[b]));

        self.quads.clear();
        self.quads.resize(segments.len(), None);
        for set in self.caps.values_mut() {
            set.clear();
        }

        if let Some(bg) = options.background {
            surface.set_fill_color(bg);
            surface.fill_rect(0.0, 0.0, width, height);
        }

        let mut fill_color: Option<Color> = None;
        let mut color_switches = 0usize;

        for i in 0..self.order.len() {
            let index = self.order[i];
            let seg = &segments[index];

            if fill_color != Some(seg.color) {
                fill_color = Some(seg.color);
                surface.set_fill_color(seg.color);
                color_switches += 1;
            }

            match seg.ring {
                Some(links) => self.draw_ring_member(segments, index, links.first, surface, ctx),
                None => self.draw_segment(seg, surface, ctx),
            }
        }

        log::trace!(
            "render pass: {} segments, {} fill-color switches",
            segments.len(),
            color_switches
        );
    }

    fn draw_segment<S: Surface>(&mut self, seg: &Segment, surface: &mut S, ctx: PassCtx) {
        let p1 = ctx.project(seg.p1);
        let p2 = ctx.project(seg.p2);
        let w1 = ctx.stroke_width(seg.p1.z, seg.width_scale);
        let w2 = ctx.stroke_width(seg.p2.z, seg.width_scale);

        if p1 == p2 {
            // Zero-length segment: a filled disk half the stroke wide.
            surface.begin_path();
            surface.arc(p1.x, p1.y, w1 / 2.0, 0.0, TAU);
            surface.close_path();
            surface.fill_path();
            return;
        }

        let mut cap1 = false;
        let mut cap2 = false;
        if !seg.suppress_caps {
            // The first segment to touch an endpoint draws its cap; later
            // segments of the same color reuse it rather than doubling ink.
            let caps = self.caps.entry(seg.color).or_default();
            cap1 = caps.insert(CapKey::new(p1, seg.p1.z));
            cap2 = caps.insert(CapKey::new(p2, seg.p2.z));
        }
        if w1 < MIN_CAP_WIDTH {
            cap1 = false;
        }
        if w2 < MIN_CAP_WIDTH {
            cap2 = false;
        }

        let angle = quad::segment_angle(p1, p2);
        let q = quad::corners(p1, p2, angle, w1, w2);

        surface.begin_path();
        surface.move_to(q.d1.x, q.d1.y);
        if cap1 {
            let c1 = q.d1.offset(angle, w1 * CUBIC_CORNER);
            let c2 = q.d2.offset(angle, w1 * CUBIC_CORNER);
            surface.cubic_to(c1.x, c1.y, c2.x, c2.y, q.d2.x, q.d2.y);
        } else {
            surface.line_to(q.d2.x, q.d2.y);
        }
        surface.line_to(q.d3.x, q.d3.y);
        if cap2 {
            let c1 = q.d3.offset(angle, -(w2 * CUBIC_CORNER));
            let c2 = q.d4.offset(angle, -(w2 * CUBIC_CORNER));
            surface.cubic_to(c1.x, c1.y, c2.x, c2.y, q.d4.x, q.d4.y);
        } else {
            surface.line_to(q.d4.x, q.d4.y);
        }
        surface.line_to(q.d1.x, q.d1.y);
        surface.close_path();
        surface.fill_path();
    }

    fn draw_ring_member<S: Surface>(
        &mut self,
        segments: &[Segment],
        index: usize,
        first: usize,
        surface: &mut S,
        ctx: PassCtx,
    ) {
        if self.quads[index].is_none() {
            self.cache_ring(segments, first, ctx);
        }

        let q = match self.quads[index] {
            Some(q) => q,
            None => panic!("curve ring member {index} unreachable from ring start {first}"),
        };

        surface.begin_path();
        surface.move_to(q.d1.x - SEAM_NUDGE, q.d1.y - SEAM_NUDGE);
        surface.line_to(q.d2.x - SEAM_NUDGE, q.d2.y - SEAM_NUDGE);
        surface.line_to(q.d3.x + SEAM_NUDGE, q.d3.y + SEAM_NUDGE);
        surface.line_to(q.d4.x + SEAM_NUDGE, q.d4.y + SEAM_NUDGE);
        surface.line_to(q.d1.x - SEAM_NUDGE, q.d1.y - SEAM_NUDGE);
        surface.close_path();
        surface.fill_path();
    }

    /// Projects and caches the quad of every member of the ring starting
    /// at `first`, then smooths shared corners around the whole cycle.
    /// Runs once per ring per pass, on the first member encountered.
    fn cache_ring(&mut self, segments: &[Segment], first: usize, ctx: PassCtx) {
        self.ring_walk.clear();

        let mut at = first;
        loop {
            let member = &segments[at];
            let links = match member.ring {
                Some(l) => l,
                None => panic!("segment {at} reached in ring walk is not ring-linked"),
            };

            self.ring_walk.push(at);
            if self.ring_walk.len() > segments.len() {
                panic!("ring walk from segment {first} does not cycle");
            }

            let p1 = ctx.project(member.p1);
            let p2 = ctx.project(member.p2);
            if p1 == p2 {
                panic!("curve ring member {at} projects to a point; no quad to smooth");
            }

            let w1 = ctx.stroke_width(member.p1.z, member.width_scale);
            let w2 = ctx.stroke_width(member.p2.z, member.width_scale);
            let angle = quad::segment_angle(p1, p2);
            self.quads[at] = Some(quad::corners(p1, p2, angle, w1, w2));

            at = links.next;
            if at == first {
                break;
            }
        }

        quad::smooth_ring(&mut self.quads, &self.ring_walk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point3;
    use crate::scene::RingLinks;

    #[derive(Debug, Copy, Clone, PartialEq)]
    enum Cmd {
        Fill(Color),
        Rect(f64, f64, f64, f64),
        Begin,
        Move(f64, f64),
        Line(f64, f64),
        Cubic(f64, f64, f64, f64, f64, f64),
        Arc(f64, f64, f64),
        Close,
        FillPath,
    }

    /// Surface that records every command verbatim.
    struct Recorder {
        width: f64,
        height: f64,
        cmds: Vec<Cmd>,
    }

    impl Recorder {
        fn new(width: f64, height: f64) -> Self {
            Self { width, height, cmds: Vec::new() }
        }

        fn count(&self, pred: impl Fn(&Cmd) -> bool) -> usize {
            self.cmds.iter().filter(|&c| pred(c)).count()
        }

        /// Vertex runs of each filled path (Move plus Line endpoints).
        fn path_vertices(&self) -> Vec<Vec<(f64, f64)>> {
            let mut paths = Vec::new();
            let mut current = Vec::new();
            for cmd in &self.cmds {
                match *cmd {
                    Cmd::Begin => current.clear(),
                    Cmd::Move(x, y) | Cmd::Line(x, y) => current.push((x, y)),
                    Cmd::FillPath => paths.push(std::mem::take(&mut current)),
                    _ => {}
                }
            }
            paths
        }
    }

    impl Surface for Recorder {
        fn width(&self) -> f64 {
            self.width
        }
        fn height(&self) -> f64 {
            self.height
        }
        fn set_fill_color(&mut self, color: Color) {
            self.cmds.push(Cmd::Fill(color));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.cmds.push(Cmd::Rect(x, y, w, h));
        }
        fn begin_path(&mut self) {
            self.cmds.push(Cmd::Begin);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.cmds.push(Cmd::Move(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.cmds.push(Cmd::Line(x, y));
        }
        fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
            self.cmds.push(Cmd::Cubic(c1x, c1y, c2x, c2y, x, y));
        }
        fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
            self.cmds.push(Cmd::Arc(x, y, radius));
        }
        fn close_path(&mut self) {
            self.cmds.push(Cmd::Close);
        }
        fn fill_path(&mut self) {
            self.cmds.push(Cmd::FillPath);
        }
    }

    fn render(scene: &Scene, options: &RenderOptions) -> Recorder {
        let mut recorder = Recorder::new(100.0, 100.0);
        Renderer::new().render(scene, &mut recorder, options);
        recorder
    }

    fn no_background() -> RenderOptions {
        RenderOptions { background: None, ..RenderOptions::default() }
    }

    // ── background ────────────────────────────────────────────────────────

    #[test]
    fn default_options_clear_to_white_first() {
        let recorder = render(&Scene::new(), &RenderOptions::default());
        assert_eq!(
            recorder.cmds,
            vec![Cmd::Fill(Color::WHITE), Cmd::Rect(0.0, 0.0, 100.0, 100.0)]
        );
    }

    #[test]
    fn background_none_skips_the_clear() {
        let mut scene = Scene::new();
        scene.push_line(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);

        let recorder = render(&scene, &no_background());
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Rect(..))), 0);
        assert_eq!(recorder.cmds[0], Cmd::Fill(Color::BLACK));
    }

    // ── single-segment projection ─────────────────────────────────────────

    #[test]
    fn unit_x_line_renders_horizontal_from_center() {
        let mut scene = Scene::new();
        scene.push_line(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);

        let recorder = render(&scene, &RenderOptions::default());
        let paths = recorder.path_vertices();
        assert_eq!(paths.len(), 1);

        // Default width is 1px at z = 0: too narrow for caps, so the quad
        // is pure line segments.
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Cubic(..))), 0);

        let xs: Vec<f64> = paths[0].iter().map(|&(x, _)| x).collect();
        let ys: Vec<f64> = paths[0].iter().map(|&(_, y)| y).collect();

        // Endpoints at screen x 50 (center) and 100, flanks ±0.5 around y 50.
        assert!(xs.iter().any(|&x| (x - 50.0).abs() < 1e-9));
        assert!(xs.iter().any(|&x| (x - 100.0).abs() < 1e-9));
        assert!(ys.iter().all(|&y| (y - 50.0).abs() <= 0.5 + 1e-9));
    }

    // ── dots ──────────────────────────────────────────────────────────────

    #[test]
    fn dot_renders_as_one_disk() {
        let mut scene = Scene::new();
        scene.push_dot(0.0, 0.0, 0.0, 0.1);

        let recorder = render(&scene, &no_background());
        // width_scale 10 × 1px base width at z = 0, halved for the radius.
        assert_eq!(
            recorder.cmds,
            vec![
                Cmd::Fill(Color::BLACK),
                Cmd::Begin,
                Cmd::Arc(50.0, 50.0, 5.0),
                Cmd::Close,
                Cmd::FillPath,
            ]
        );
    }

    // ── color batching ────────────────────────────────────────────────────

    #[test]
    fn fill_color_switches_once_per_color_run() {
        let red = Color::new(220, 30, 30);

        let mut scene = Scene::new();
        scene.begin_group();
        scene.push_line(0.0, 0.0, 3.0, 1.0, 0.0, 3.0);
        scene.push_line(0.0, 0.0, 2.0, 1.0, 0.0, 2.0);
        scene.colorize(red);
        scene.end_group().unwrap();
        scene.push_line(0.0, 0.0, 1.0, 1.0, 0.0, 1.0);

        let recorder = render(&scene, &no_background());
        // Far-to-near sort puts both red segments first; one switch each.
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Fill(..))), 2);
        assert_eq!(recorder.cmds[0], Cmd::Fill(red));
    }

    #[test]
    fn segments_emit_far_to_near() {
        let mut scene = Scene::new();
        scene.push_dot(0.25, 0.0, -0.5, 0.1); // near
        scene.push_dot(-0.25, 0.0, 0.5, 0.1); // far

        let recorder = render(&scene, &no_background());
        let arcs: Vec<&Cmd> = recorder.cmds.iter().filter(|c| matches!(c, Cmd::Arc(..))).collect();
        assert_eq!(arcs.len(), 2);
        // The far dot (pushed second) must be emitted first.
        let Cmd::Arc(x_first, ..) = *arcs[0] else { unreachable!() };
        assert!(x_first < 50.0, "far dot projects left of center, got {x_first}");
    }

    // ── caps ──────────────────────────────────────────────────────────────

    #[test]
    fn shared_endpoint_draws_its_cap_once() {
        let mut scene = Scene::new();
        scene.push_line(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        scene.push_line(0.0, 0.0, 0.0, 0.0, 1.0, 0.0);

        // 4px strokes: caps are in play.
        let options = RenderOptions { stroke_width: 4.0, ..no_background() };
        let recorder = render(&scene, &options);

        // Four endpoints, one shared: 3 caps, not 4.
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Cubic(..))), 3);
    }

    #[test]
    fn cap_dedup_is_scoped_per_color() {
        let mut scene = Scene::new();
        scene.push_line(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        scene.begin_group();
        scene.push_line(0.0, 0.0, 0.0, 0.0, 1.0, 0.0);
        scene.colorize(Color::new(220, 30, 30));
        scene.end_group().unwrap();

        let options = RenderOptions { stroke_width: 4.0, ..no_background() };
        let recorder = render(&scene, &options);

        // Same shared endpoint, different colors: both caps drawn.
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Cubic(..))), 4);
    }

    #[test]
    fn narrow_strokes_get_no_caps() {
        let mut scene = Scene::new();
        scene.push_line(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);

        // Default 1px stroke is below the cap threshold.
        let recorder = render(&scene, &no_background());
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Cubic(..))), 0);
    }

    // ── curve rings ───────────────────────────────────────────────────────

    #[test]
    fn ring_emits_one_capless_quad_per_member() {
        let steps = 8;
        let mut scene = Scene::new();
        scene.push_circle_steps(0.0, 0.0, 0.0, 0.5, steps);

        let recorder = render(&scene, &no_background());
        assert_eq!(recorder.count(|c| matches!(c, Cmd::FillPath)), steps as usize);
        assert_eq!(recorder.count(|c| matches!(c, Cmd::Cubic(..))), 0);

        for path in recorder.path_vertices() {
            // Move + 4 lines, closing back on the first corner.
            assert_eq!(path.len(), 5);
            assert_eq!(path[0], path[4]);
        }
    }

    #[test]
    fn ring_quads_share_smoothed_corners() {
        let mut scene = Scene::new();
        scene.push_circle_steps(0.0, 0.0, 0.0, 0.5, 8);

        let recorder = render(&scene, &no_background());
        let paths = recorder.path_vertices();

        // After smoothing, every quad's leading edge (d1, d2) coincides
        // with some neighbor's trailing edge (d4, d3), up to the seam
        // nudge applied at emission.
        let tolerance = 3.0 * SEAM_NUDGE;
        for p in &paths {
            let found = paths.iter().any(|q| {
                !std::ptr::eq(p, q)
                    && (p[0].0 - q[3].0).abs() < tolerance
                    && (p[0].1 - q[3].1).abs() < tolerance
                    && (p[1].0 - q[2].0).abs() < tolerance
                    && (p[1].1 - q[2].1).abs() < tolerance
            });
            assert!(found, "no neighbor shares the edge of {:?}", p[0]);
        }
    }

    #[test]
    #[should_panic(expected = "projects to a point")]
    fn degenerate_ring_member_is_fatal() {
        let mut scene = Scene::new();
        let p = Point3::zero();
        let mut seg = Segment::new(p, p);
        seg.suppress_caps = true;
        seg.ring = Some(RingLinks { first: 0, prev: 0, next: 0 });
        scene.push(seg);

        render(&scene, &no_background());
    }

    // ── pass isolation ────────────────────────────────────────────────────

    #[test]
    fn repeated_passes_are_identical() {
        let mut scene = Scene::new();
        scene.push_cuboid(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        scene.push_circle_steps(0.0, 0.0, 0.0, 0.5, 12);
        scene.push_dot(0.0, 0.5, 0.0, 0.05);
        scene.rotate(0.3, 0.5, 0.1);

        let mut renderer = Renderer::new();
        let options = RenderOptions::default();

        let mut first = Recorder::new(100.0, 100.0);
        renderer.render(&scene, &mut first, &options);
        let mut second = Recorder::new(100.0, 100.0);
        renderer.render(&scene, &mut second, &options);

        assert_eq!(first.cmds, second.cmds);
    }
}
