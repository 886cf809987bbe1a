use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A straight line drawn by one `Forward` step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Running component-wise extrema of every point folded into it.
///
/// Starts empty, with `min = +inf` and `max = -inf`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    pub const EMPTY: Self = Self {
        min: Vec2::INFINITY,
        max: Vec2::NEG_INFINITY,
    };

    /// Grows the box to include `point`.
    pub fn include(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True until at least one point has been folded in.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Midpoint of the box. `None` when empty.
    pub fn center(&self) -> Option<Vec2> {
        (!self.is_empty()).then(|| (self.min + self.max) * 0.5)
    }

    /// Width and height of the box. Zero when empty.
    pub fn size(&self) -> Vec2 {
        if self.is_empty() {
            Vec2::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Distance at which a camera with vertical field of view `fov_y`
    /// (radians) looking at [`center`](Self::center) sees the whole box.
    ///
    /// Uses the larger of width and height so the box fits at any aspect ratio
    /// of at least 1.
    pub fn fit_distance(&self, fov_y: f32) -> f32 {
        let half_extent = self.size().max_element() * 0.5;
        half_extent / (fov_y * 0.5).tan()
    }
}

/// The interpreted picture: segments in the order they were drawn, plus their extent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub segments: Vec<Segment>,
    pub bounds: BoundingBox,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a segment and folds both of its endpoints into the bounds.
    pub fn add_segment(&mut self, segment: Segment) {
        self.bounds.include(segment.start);
        self.bounds.include(segment.end);
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first `count` segments in drawing order, for incremental reveal
    /// (one more segment per animation frame).
    pub fn reveal(&self, count: usize) -> &[Segment] {
        &self.segments[..count.min(self.segments.len())]
    }

    /// Hands every segment, in order, to a line-drawing backend.
    pub fn render_into<S: SegmentSink + ?Sized>(&self, sink: &mut S) {
        for (index, segment) in self.segments.iter().enumerate() {
            sink.draw_segment(index, segment);
        }
    }
}

/// A backend that can draw a line between two 2D points.
///
/// Styling (color, width) is the backend's choice; `index` is the segment's
/// position in drawing order.
pub trait SegmentSink {
    fn draw_segment(&mut self, index: usize, segment: &Segment);
}

impl SegmentSink for Vec<Segment> {
    fn draw_segment(&mut self, _index: usize, segment: &Segment) {
        self.push(*segment);
    }
}
