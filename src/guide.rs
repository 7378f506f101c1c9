//! Alignment guide overlay as line segments
//!
//! The guides are pure geometry: a crosshair through the middle of the view,
//! the outline of the destination rectangle, and the outline plus cross lines
//! of the rotated image. Drawing them is left to the caller.

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    pub fn midpoint(&self) -> Point {
        Point::new((self.from.x + self.to.x) / 2.0, (self.from.y + self.to.y) / 2.0)
    }
}

/// What a guide segment outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideKind {
    /// Horizontal and vertical lines through the view center
    Crosshair,
    /// Outline of the axis-aligned destination rectangle
    Destination,
    /// Outline and cross lines of the rotated image
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guide {
    pub kind: GuideKind,
    #[serde(flatten)]
    pub segment: Segment,
}

/// Horizontal line through the vertical middle, vertical line through the
/// horizontal middle
pub fn crosshair(view: &Rect) -> [Segment; 2] {
    [
        Segment::new(
            Point::new(view.min_x(), view.mid_y()),
            Point::new(view.max_x(), view.mid_y()),
        ),
        Segment::new(
            Point::new(view.mid_x(), view.min_y()),
            Point::new(view.mid_x(), view.max_y()),
        ),
    ]
}

/// Closed outline top-left, top-right, bottom-right, bottom-left
pub fn outline(rect: &Rect) -> [Segment; 4] {
    closed_path([
        rect.top_left(),
        rect.top_right(),
        rect.bottom_right(),
        rect.bottom_left(),
    ])
}

/// Both diagonals and both midlines of a rectangle
pub fn image_cross(rect: &Rect) -> [Segment; 4] {
    [
        Segment::new(rect.top_left(), rect.bottom_right()),
        Segment::new(rect.top_right(), rect.bottom_left()),
        Segment::new(rect.top(), rect.bottom()),
        Segment::new(rect.left(), rect.right()),
    ]
}

/// Closed polygon through four points
pub fn closed_path(points: [Point; 4]) -> [Segment; 4] {
    [
        Segment::new(points[0], points[1]),
        Segment::new(points[1], points[2]),
        Segment::new(points[2], points[3]),
        Segment::new(points[3], points[0]),
    ]
}

/// All guides for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GuideSet {
    pub guides: Vec<Guide>,
}

impl GuideSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crosshair over `view`, the `destination` outline, and the rotated
    /// image given by its four corners (counter-clockwise from bottom-left).
    ///
    /// The image cross lines join opposite corners and opposite edge
    /// midpoints of the rotated outline.
    pub fn for_frame(view: &Rect, destination: &Rect, image_corners: [Point; 4]) -> Self {
        let mut set = Self::new();
        set.extend(GuideKind::Crosshair, crosshair(view));
        set.extend(GuideKind::Destination, outline(destination));

        let [bl, br, tr, tl] = image_corners;
        set.extend(GuideKind::Image, closed_path([tl, tr, br, bl]));
        let mid = |a: Point, b: Point| Segment::new(a, b).midpoint();
        set.extend(
            GuideKind::Image,
            [
                Segment::new(tl, br),
                Segment::new(tr, bl),
                Segment::new(mid(tl, tr), mid(bl, br)),
                Segment::new(mid(tl, bl), mid(tr, br)),
            ],
        );
        set
    }

    pub fn extend(&mut self, kind: GuideKind, segments: impl IntoIterator<Item = Segment>) {
        self.guides
            .extend(segments.into_iter().map(|segment| Guide { kind, segment }));
    }

    pub fn of_kind(&self, kind: GuideKind) -> impl Iterator<Item = &Segment> + '_ {
        self.guides
            .iter()
            .filter(move |g| g.kind == kind)
            .map(|g| &g.segment)
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}
