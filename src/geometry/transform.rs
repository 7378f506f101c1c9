//! Rotation of points and rectangles about a center
//!
//! ## Rotation Convention
//!
//! Coordinates are up-positive and positive angles turn counter-clockwise, in
//! degrees. This is the same matrix an affine `rotationAngle` transform applies
//! in a bottom-left-origin drawing space:
//! - 0° = no rotation
//! - 90° = right becomes up
//! - 180° = upside down
//! - 270° = right becomes down
//!
//! ## Loose Bounds
//!
//! The bounds of a rotated rectangle are the AABB of its four rotated corners.
//! For a rectangle this is exact, and its size equals
//! `(|w cos| + |h sin|, |w sin| + |h cos|)`.

use super::types::{Point, Rect};

/// A 2D rotation around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTransform {
    /// Rotation angle in degrees (counter-clockwise positive)
    pub angle_degrees: f64,
    /// Center point of rotation
    pub center: Point,
}

impl RotationTransform {
    /// Create a new rotation transform.
    ///
    /// # Arguments
    /// * `angle_degrees` - Rotation angle in degrees (counter-clockwise positive)
    /// * `center` - Center point of rotation
    pub fn new(angle_degrees: f64, center: Point) -> Self {
        Self {
            angle_degrees,
            center,
        }
    }

    /// Rotation of a rectangle about its own center
    pub fn about_center_of(angle_degrees: f64, rect: &Rect) -> Self {
        Self::new(angle_degrees, rect.center())
    }

    /// Check if this is effectively a no-op (0° rotation).
    pub fn is_identity(&self) -> bool {
        self.angle_degrees.abs() < f64::EPSILON
    }

    /// Rotate a point around the center.
    ///
    /// ```text
    /// x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
    /// y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
    /// ```
    pub fn transform_point(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }

        let (sin_a, cos_a) = self.angle_degrees.to_radians().sin_cos();

        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        Point {
            x: self.center.x + dx * cos_a - dy * sin_a,
            y: self.center.y + dx * sin_a + dy * cos_a,
        }
    }

    /// The four corners of `rect` after rotation, in the order of
    /// [`Rect::corners`].
    pub fn transform_rect_outline(&self, rect: &Rect) -> [Point; 4] {
        rect.corners().map(|p| self.transform_point(p))
    }

    /// Axis-aligned bounds of `rect` after rotation.
    pub fn transform_bounds(&self, rect: &Rect) -> Rect {
        if self.is_identity() {
            return *rect;
        }

        let rotated = self.transform_rect_outline(rect);
        // Four corners are never empty
        Rect::bounding(&rotated).unwrap_or(*rect)
    }
}
