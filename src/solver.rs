//! Anchor-aware rotation placement
//!
//! Given the pre-rotation size of an image, a rotation angle and an anchor,
//! [`compute_destination`] returns the axis-aligned rectangle that the rotated
//! image must be drawn into so that the anchor of the *unrotated* image lands
//! on a chosen fixed point.
//!
//! The image is rotated about its own center, which is also the center of the
//! destination rectangle. Starting from the destination that centers the image
//! on the fixed point, each anchor shifts the origin by the rotated offset
//! between the image center and that anchor:
//!
//! | anchor | x shift | y shift |
//! |---|---|---|
//! | top | `+ h/2 sin` | `- h/2 cos` |
//! | bottom | `- h/2 sin` | `+ h/2 cos` |
//! | left | `+ w/2 cos` | `+ w/2 sin` |
//! | right | `- w/2 cos` | `- w/2 sin` |
//!
//! Corners combine the horizontal edge shift with the vertical edge shift.
//!
//! Preconditions: `size.width > 0`, `size.height > 0` and a finite angle.
//! Nothing here checks them; degenerate input yields degenerate output.

use serde::Serialize;

use crate::geometry::{Anchor, Point, Rect, RotationTransform, Size};

/// Destination rectangle for a rotated image
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotationResult {
    /// Minimum corner of the destination rectangle
    pub origin: Point,
    /// Bounding size of the rotated image
    pub size: Size,
}

impl RotationResult {
    /// The destination as a [`Rect`]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Center of the destination, which is also the rotation center
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Where `anchor` of an unrotated `image` ends up once it is centered in
    /// this destination and rotated by `angle_degrees`.
    ///
    /// For a result produced by [`compute_destination`] with the same inputs
    /// this is the fixed point.
    pub fn anchor_position(&self, image: Size, angle_degrees: f64, anchor: Anchor) -> Point {
        let center = self.center();
        let unrotated = Rect::from_center(center, image);
        RotationTransform::new(angle_degrees, center).transform_point(unrotated.anchor_point(anchor))
    }

    /// Outline of the rotated image inside this destination
    pub fn image_outline(&self, image: Size, angle_degrees: f64) -> [Point; 4] {
        let center = self.center();
        RotationTransform::new(angle_degrees, center)
            .transform_rect_outline(&Rect::from_center(center, image))
    }
}

/// Bounding size of a `size` rectangle rotated by `angle_degrees`
pub fn rotated_size(size: Size, angle_degrees: f64) -> Size {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Size {
        width: (size.width * cos).abs() + (size.height * sin).abs(),
        height: (size.width * sin).abs() + (size.height * cos).abs(),
    }
}

/// Compute the destination rectangle that keeps `anchor` of a `size` image at
/// `fixed_point` after rotating it by `angle_degrees` (counter-clockwise,
/// up-positive coordinates).
///
/// # Example
///
/// ```rust
/// use anchor_rotate::{compute_destination, Anchor, Point, Size};
///
/// let result = compute_destination(
///     Size::new(100.0, 100.0),
///     0.0,
///     Anchor::Center,
///     Point::new(50.0, 50.0),
/// );
/// assert_eq!(result.origin, Point::new(0.0, 0.0));
/// assert_eq!(result.size, Size::new(100.0, 100.0));
/// ```
pub fn compute_destination(
    size: Size,
    angle_degrees: f64,
    anchor: Anchor,
    fixed_point: Point,
) -> RotationResult {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let new_size = rotated_size(size, angle_degrees);

    let half_w = size.width / 2.0;
    let half_h = size.height / 2.0;

    let top = (half_h * sin, -half_h * cos);
    let bottom = (-half_h * sin, half_h * cos);
    let left = (half_w * cos, half_w * sin);
    let right = (-half_w * cos, -half_w * sin);

    let (dx, dy) = match anchor {
        Anchor::Center => (0.0, 0.0),
        Anchor::Top => top,
        Anchor::Bottom => bottom,
        Anchor::Left => left,
        Anchor::Right => right,
        Anchor::TopLeft => (left.0 + top.0, left.1 + top.1),
        Anchor::TopRight => (right.0 + top.0, right.1 + top.1),
        Anchor::BottomLeft => (left.0 + bottom.0, left.1 + bottom.1),
        Anchor::BottomRight => (right.0 + bottom.0, right.1 + bottom.1),
    };

    let origin = Point {
        x: fixed_point.x - new_size.width / 2.0 + dx,
        y: fixed_point.y - new_size.height / 2.0 + dy,
    };

    log::trace!(
        "{anchor} @ ({:.3}, {:.3}) angle={angle_degrees}: origin=({:.3}, {:.3}) size={:.3}x{:.3}",
        fixed_point.x,
        fixed_point.y,
        origin.x,
        origin.y,
        new_size.width,
        new_size.height
    );

    RotationResult {
        origin,
        size: new_size,
    }
}
