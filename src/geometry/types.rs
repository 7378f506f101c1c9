//! Core value types: points, sizes and axis-aligned rectangles
//!
//! All coordinates are up-positive: `min_y` is the bottom edge and `max_y` the
//! top edge of a rectangle.

use serde::Serialize;

use super::anchor::Anchor;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at the coordinate origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Translate by the given deltas
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width and height of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle given by its minimum corner and its size.
///
/// The nine reference points (corners, edge midpoints, center) are derived from
/// the current bounds on every call; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin point and a size
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rectangle of the given size centered on a point
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Create a zero-sized rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn mid_x(&self) -> f64 {
        (self.min_x() + self.max_x()) / 2.0
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        (self.min_y() + self.max_y()) / 2.0
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x(), self.max_y())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x(), self.min_y())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    /// Midpoint of the top edge
    pub fn top(&self) -> Point {
        Point::new(self.mid_x(), self.max_y())
    }

    /// Midpoint of the bottom edge
    pub fn bottom(&self) -> Point {
        Point::new(self.mid_x(), self.min_y())
    }

    /// Midpoint of the left edge
    pub fn left(&self) -> Point {
        Point::new(self.min_x(), self.mid_y())
    }

    /// Midpoint of the right edge
    pub fn right(&self) -> Point {
        Point::new(self.max_x(), self.mid_y())
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Reference point named by an anchor
    pub fn anchor_point(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::TopLeft => self.top_left(),
            Anchor::Top => self.top(),
            Anchor::TopRight => self.top_right(),
            Anchor::Left => self.left(),
            Anchor::Center => self.center(),
            Anchor::Right => self.right(),
            Anchor::BottomLeft => self.bottom_left(),
            Anchor::Bottom => self.bottom(),
            Anchor::BottomRight => self.bottom_right(),
        }
    }

    /// The four corners, counter-clockwise starting at the bottom-left
    pub fn corners(&self) -> [Point; 4] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }

    /// Check if this rectangle contains a point (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.min_x().min(other.min_x());
        let y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(x, y, max_x - x, max_y - y)
    }

    /// Smallest rectangle containing every point, or `None` for an empty slice
    pub fn bounding(points: &[Point]) -> Option<Rect> {
        let first = points.first()?;
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}
