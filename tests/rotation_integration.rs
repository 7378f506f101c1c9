//! Integration tests for anchored rotation.
//!
//! These tests verify that:
//! - The center anchor keeps the destination centered on the fixed point
//! - Every anchor of the unrotated image lands on the fixed point after rotation
//! - Rotated bounding sizes follow the half-turn and square symmetries
//! - Corner anchors pin the corner itself, not the center

use anchor_rotate::{
    compute_destination, rotated_size, Anchor, Point, Rect, RotationTransform, Size,
};

const EPSILON: f64 = 1e-6;

/// Sizes used across the property checks
const SIZES: [(f64, f64); 4] = [(100.0, 100.0), (100.0, 150.0), (37.5, 12.0), (640.0, 480.0)];

/// Angles in [-720, 720], including quarter turns and awkward values
fn angles() -> Vec<f64> {
    let mut angles: Vec<f64> = (-48..=48).map(|i| f64::from(i) * 15.0).collect();
    angles.extend([-719.5, -333.3, -1.0, 0.25, 7.0, 89.999, 123.456, 271.0, 719.9]);
    angles
}

fn assert_close(actual: Point, expected: Point, context: &str) {
    assert!(
        (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
        "{}: expected ({}, {}), got ({}, {})",
        context,
        expected.x,
        expected.y,
        actual.x,
        actual.y
    );
}

#[test]
fn test_center_anchor_centers_destination() {
    let fixed = Point::new(12.5, -40.0);
    for (w, h) in SIZES {
        for angle in angles() {
            let result = compute_destination(Size::new(w, h), angle, Anchor::Center, fixed);
            let rect = result.rect();
            let mid = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            assert_close(mid, fixed, &format!("{w}x{h} at {angle}°"));
        }
    }
}

#[test]
fn test_zero_angle_is_plain_anchored_placement() {
    let fixed = Point::new(240.0, 160.0);
    for (w, h) in SIZES {
        let size = Size::new(w, h);
        for anchor in Anchor::ALL {
            let result = compute_destination(size, 0.0, anchor, fixed);
            assert_eq!(result.size, size, "{anchor}: size must not change");

            // Offset of the anchor from the rectangle's minimum corner
            let local = Rect::new(0.0, 0.0, w, h).anchor_point(anchor);
            let expected = Point::new(fixed.x - local.x, fixed.y - local.y);
            assert_close(result.origin, expected, &format!("{anchor} {w}x{h}"));
        }
    }
}

#[test]
fn test_every_anchor_lands_on_fixed_point() {
    let fixed = Point::new(-3.0, 99.0);
    for (w, h) in SIZES {
        let size = Size::new(w, h);
        for anchor in Anchor::ALL {
            for angle in angles() {
                let result = compute_destination(size, angle, anchor, fixed);
                let pinned = result.anchor_position(size, angle, anchor);
                assert_close(pinned, fixed, &format!("{anchor} {w}x{h} at {angle}°"));
            }
        }
    }
}

#[test]
fn test_rotated_size_half_turn_symmetry() {
    for (w, h) in SIZES {
        for angle in angles() {
            let a = compute_destination(Size::new(w, h), angle, Anchor::Center, Point::zero());
            let b = compute_destination(
                Size::new(w, h),
                angle + 180.0,
                Anchor::Center,
                Point::zero(),
            );
            assert!((a.size.width - b.size.width).abs() < EPSILON);
            assert!((a.size.height - b.size.height).abs() < EPSILON);
        }
    }
}

#[test]
fn test_square_at_45_has_equal_bounds() {
    for side in [1.0, 100.0, 333.0] {
        let s = rotated_size(Size::new(side, side), 45.0);
        assert!(
            (s.width - s.height).abs() < EPSILON,
            "{side}: {} vs {}",
            s.width,
            s.height
        );
    }
}

#[test]
fn test_rotated_size_matches_rotated_corner_bounds() {
    for (w, h) in SIZES {
        for angle in angles() {
            let rect = Rect::new(0.0, 0.0, w, h);
            let bounds = RotationTransform::about_center_of(angle, &rect).transform_bounds(&rect);
            let size = rotated_size(Size::new(w, h), angle);
            assert!((bounds.width - size.width).abs() < EPSILON, "{w}x{h} at {angle}");
            assert!((bounds.height - size.height).abs() < EPSILON, "{w}x{h} at {angle}");
        }
    }
}

#[test]
fn test_example_square_unrotated() {
    let result = compute_destination(
        Size::new(100.0, 100.0),
        0.0,
        Anchor::Center,
        Point::new(50.0, 50.0),
    );
    assert_close(result.origin, Point::new(0.0, 0.0), "origin");
    assert_eq!(result.size, Size::new(100.0, 100.0));
}

#[test]
fn test_example_tall_quarter_turn() {
    let result = compute_destination(Size::new(100.0, 150.0), 90.0, Anchor::Center, Point::zero());
    assert!((result.size.width - 150.0).abs() < EPSILON);
    assert!((result.size.height - 100.0).abs() < EPSILON);
    assert_close(result.origin, Point::new(-75.0, -50.0), "origin");
}

#[test]
fn test_example_top_anchor_at_45() {
    let size = Size::new(100.0, 100.0);
    let result = compute_destination(size, 45.0, Anchor::Top, Point::zero());

    // Place the unrotated image in the middle of the returned rect, then turn
    // its top edge midpoint about that center
    let center = result.center();
    let image = Rect::from_center(center, size);
    let top = RotationTransform::new(45.0, center).transform_point(image.top());
    assert_close(top, Point::zero(), "top edge midpoint");
}

#[test]
fn test_corner_anchors_pin_the_corner() {
    let size = Size::new(100.0, 150.0);
    let fixed = Point::new(200.0, 100.0);
    let corners = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    for anchor in corners {
        for angle in [30.0, 45.0, 90.0, -120.0] {
            let result = compute_destination(size, angle, anchor, fixed);
            let center = result.center();
            let corner = Rect::from_center(center, size).anchor_point(anchor);
            let rotated = RotationTransform::new(angle, center).transform_point(corner);
            assert_close(rotated, fixed, &format!("{anchor} at {angle}°"));
        }
    }
}

#[test]
fn test_corner_anchors_differ_from_center_placement() {
    // Centering the image for a corner anchor would leave the corner off the
    // fixed point; corners must move the destination away from the centered one.
    let size = Size::new(100.0, 150.0);
    let centered = compute_destination(size, 30.0, Anchor::Center, Point::zero());
    for anchor in Anchor::ALL.into_iter().filter(Anchor::is_corner) {
        let result = compute_destination(size, 30.0, anchor, Point::zero());
        let moved = result.origin.distance_to(centered.origin);
        // Corner sits half a diagonal away from the center
        let half_diagonal = 0.5 * size.width.hypot(size.height);
        assert!(
            (moved - half_diagonal).abs() < EPSILON,
            "{anchor}: moved {moved}, expected {half_diagonal}"
        );
    }
}

#[test]
fn test_results_are_independent_of_call_order() {
    let size = Size::new(100.0, 150.0);
    let first = compute_destination(size, 33.0, Anchor::Left, Point::new(1.0, 2.0));
    let _ = compute_destination(size, -200.0, Anchor::BottomRight, Point::new(-9.0, 4.0));
    let again = compute_destination(size, 33.0, Anchor::Left, Point::new(1.0, 2.0));
    assert_eq!(first, again);
}
