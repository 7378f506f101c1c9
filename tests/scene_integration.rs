//! Integration tests for scene files.
//!
//! Scenes are parsed from TOML, validated, and solved into frames.

use pretty_assertions::assert_eq;

use anchor_rotate::{Anchor, GuideKind, Point, Rect, Scene, SceneError, Size};

#[test]
fn test_full_scene() {
    let source = r#"
        [view]
        x = 10.0
        y = 20.0
        width = 640.0
        height = 480.0

        [image]
        preset = "tall"

        [rotation]
        angle = -30.0
        anchor = "imageBottomRight"
        fixed_point = [100.0, 50.0]

        [guides]
        enabled = false
    "#;

    let scene = Scene::from_toml(source).expect("Should parse");
    assert_eq!(
        scene,
        Scene {
            view: Rect::new(10.0, 20.0, 640.0, 480.0),
            size: Size::new(100.0, 150.0),
            angle: -30.0,
            anchor: Anchor::BottomRight,
            fixed_point: Some(Point::new(100.0, 50.0)),
            draw_guides: false,
        }
    );
}

#[test]
fn test_image_dimensions_override_preset() {
    let source = r#"
        [image]
        preset = "tall"
        width = 80.0
    "#;
    let scene = Scene::from_toml(source).expect("Should parse");
    assert_eq!(scene.size, Size::new(80.0, 150.0));
}

#[test]
fn test_integer_angle_accepted() {
    let scene = Scene::from_toml("[rotation]\nangle = 45\n").expect("Should parse");
    assert_eq!(scene.angle, 45.0);
}

#[test]
fn test_fixed_point_defaults_to_view_center() {
    let source = r#"
        [view]
        width = 200.0
        height = 100.0
    "#;
    let scene = Scene::from_toml(source).expect("Should parse");
    assert_eq!(scene.fixed_point, None);
    assert_eq!(scene.fixed_point(), Point::new(100.0, 50.0));
}

#[test]
fn test_unknown_anchor_is_parse_error_with_span() {
    let source = "[rotation]\nanchor = \"top-lfet\"\n";
    let err = Scene::from_toml(source).unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)), "got {err:?}");
    assert!(err.to_string().contains("top-lfet"));
    assert!(err.span().is_some());
}

#[test]
fn test_unknown_field_rejected() {
    let source = "[rotation]\nangel = 10.0\n";
    let err = Scene::from_toml(source).unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)), "got {err:?}");
}

#[test]
fn test_zero_width_points_at_value() {
    let source = "[image]\nwidth = 0.0\nheight = 10.0\n";
    let err = Scene::from_toml(source).unwrap_err();
    match &err {
        SceneError::Invalid { field, span, .. } => {
            assert_eq!(*field, "image width");
            let span = span.clone().expect("span");
            assert_eq!(&source[span], "0.0");
        }
        other => panic!("expected Invalid, got {other:?}"),
    }

    let report = err.format(source, "scene.toml");
    assert!(report.contains("scene.toml"));
}

#[test]
fn test_negative_view_rejected() {
    let source = "[view]\nwidth = -1.0\nheight = 10.0\n";
    let err = Scene::from_toml(source).unwrap_err();
    assert!(err.to_string().contains("view width"), "got {err}");
}

#[test]
fn test_invalid_toml_error() {
    let result = Scene::from_toml("this is not valid toml {{{{");
    assert!(matches!(result, Err(SceneError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Scene::from_file(std::path::Path::new("does/not/exist.toml"));
    assert!(matches!(result, Err(SceneError::Io(_))));
}

#[test]
fn test_solved_frame_pins_anchor() {
    let source = r#"
        [image]
        preset = "tall"

        [rotation]
        angle = 60.0
        anchor = "left"
    "#;
    let scene = Scene::from_toml(source).expect("Should parse");
    let frame = scene.solve();

    let pinned = frame
        .destination
        .anchor_position(scene.size, scene.angle, scene.anchor);
    let fixed = scene.fixed_point();
    assert!((pinned.x - fixed.x).abs() < 1e-9);
    assert!((pinned.y - fixed.y).abs() < 1e-9);

    // The rotated image outline touches every side of the destination
    let image: Vec<_> = frame.guides.of_kind(GuideKind::Image).take(4).collect();
    let rect = frame.destination.rect();
    for side in [rect.min_x(), rect.max_x()] {
        assert!(image.iter().any(|s| (s.from.x - side).abs() < 1e-9));
    }
    for side in [rect.min_y(), rect.max_y()] {
        assert!(image.iter().any(|s| (s.from.y - side).abs() < 1e-9));
    }
}
