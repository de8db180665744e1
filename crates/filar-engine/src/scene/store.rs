use core::ops::Range;

use crate::error::ScopeUnderflow;

use super::Segment;

/// Ordered segment store with stack-scoped grouping.
///
/// The store only grows: segments are appended by the primitive builders
/// and mutated in place by transforms, never removed individually.
/// [`begin_group`] / [`end_group`] bracket a suffix of the sequence so that
/// transform and color operations apply to just the segments pushed inside
/// the group; outside any group they apply to the whole scene.
///
/// ```
/// use filar_engine::Scene;
///
/// let mut scene = Scene::new();
/// scene.push_cuboid(
///     filar_engine::coords::Point3::new(-1.0, -1.0, -1.0),
///     filar_engine::coords::Point3::new(1.0, 1.0, 1.0),
/// );
///
/// scene.begin_group();
/// scene.push_circle(0.0, 0.0, 0.0, 0.5);
/// scene.rotate(0.0, 0.8, 0.0); // rotates the circle, not the box
/// scene.end_group().unwrap();
/// ```
///
/// [`begin_group`]: Scene::begin_group
/// [`end_group`]: Scene::end_group
#[derive(Debug, Default)]
pub struct Scene {
    segments: Vec<Segment>,
    scopes: Vec<usize>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a group: subsequent transform/color operations apply only to
    /// segments pushed after this call, until the matching [`end_group`].
    /// Groups nest.
    ///
    /// [`end_group`]: Scene::end_group
    #[inline]
    pub fn begin_group(&mut self) {
        self.scopes.push(self.segments.len());
    }

    /// Closes the most recently opened group.
    ///
    /// Fails with [`ScopeUnderflow`] if no group is open; the scene is left
    /// unmodified in that case.
    #[inline]
    pub fn end_group(&mut self) -> Result<(), ScopeUnderflow> {
        match self.scopes.pop() {
            Some(_) => Ok(()),
            None => Err(ScopeUnderflow),
        }
    }

    /// Appends a raw segment. The shape helpers in `scene::shapes` are the
    /// usual entry points; this is the escape hatch for custom geometry.
    #[inline]
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Removes every segment and forgets open groups. Keeps capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.segments.clear();
        self.scopes.clear();
    }

    /// Index range currently affected by transform/color operations:
    /// `[scope_start, len)`, where `scope_start` is the top of the group
    /// stack or 0 outside any group.
    #[inline]
    pub fn scoped_range(&self) -> Range<usize> {
        self.scopes.last().copied().unwrap_or(0)..self.segments.len()
    }

    #[inline]
    pub(crate) fn scoped_segments(&self) -> &[Segment] {
        &self.segments[self.scoped_range()]
    }

    #[inline]
    pub(crate) fn scoped_segments_mut(&mut self) -> &mut [Segment] {
        let range = self.scoped_range();
        &mut self.segments[range]
    }

    #[inline]
    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }
}
