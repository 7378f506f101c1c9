//! Coordinate-geometry primitives
//!
//! Points, sizes, rectangles with their nine reference points, the anchor
//! taxonomy shared with the solver, and rotation about a center.

pub mod anchor;
pub mod transform;
pub mod types;

pub use anchor::{Anchor, ParseAnchorError};
pub use transform::RotationTransform;
pub use types::{Point, Rect, Size};
