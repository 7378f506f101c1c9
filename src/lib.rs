//! Anchor Rotate - keep a chosen point of a rectangle fixed while rotating it
//!
//! A rectangle of known size is rotated about its own center. The library
//! computes the axis-aligned destination rectangle to draw the rotated image
//! into so that one of nine anchors of the *unrotated* rectangle (a corner, an
//! edge midpoint, or the center) lands on a fixed point.
//!
//! Coordinates are up-positive and positive angles turn counter-clockwise.
//!
//! # Example
//!
//! ```rust
//! use anchor_rotate::{compute_destination, Anchor, Point, Size};
//!
//! let size = Size::new(100.0, 150.0);
//! let fixed = Point::new(0.0, 0.0);
//! let result = compute_destination(size, 45.0, Anchor::Top, fixed);
//!
//! let pinned = result.anchor_position(size, 45.0, Anchor::Top);
//! assert!((pinned.x - fixed.x).abs() < 1e-9);
//! assert!((pinned.y - fixed.y).abs() < 1e-9);
//! ```

pub mod error;
pub mod geometry;
pub mod guide;
pub mod report;
pub mod scene;
pub mod solver;

pub use error::SceneError;
pub use geometry::{Anchor, ParseAnchorError, Point, Rect, RotationTransform, Size};
pub use guide::{Guide, GuideKind, GuideSet, Segment};
pub use report::{format_text, format_toml, ReportFormat};
pub use scene::{Frame, Scene, SizePreset};
pub use solver::{compute_destination, rotated_size, RotationResult};
