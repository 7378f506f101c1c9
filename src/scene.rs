//! Scene configuration
//!
//! A scene is everything one demo frame needs: the view the image is drawn
//! in, the image size, the rotation angle, the anchor, where the anchor is
//! pinned, and whether guides are drawn. Scenes load from TOML:
//!
//! ```toml
//! [view]
//! width = 480.0
//! height = 320.0
//!
//! [image]
//! preset = "tall"
//!
//! [rotation]
//! angle = 30.0
//! anchor = "top-left"
//! fixed_point = [240.0, 160.0]
//!
//! [guides]
//! enabled = true
//! ```
//!
//! Every table is optional. A missing `fixed_point` pins the anchor at the
//! view center.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toml::Spanned;

use crate::error::SceneError;
use crate::geometry::{Anchor, Point, Rect, Size};
use crate::guide::GuideSet;
use crate::solver::{compute_destination, RotationResult};

/// The two image sizes offered by the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizePreset {
    /// 100 x 100
    Square,
    /// 100 x 150
    Tall,
}

impl SizePreset {
    pub fn size(&self) -> Size {
        match self {
            SizePreset::Square => Size::new(100.0, 100.0),
            SizePreset::Tall => Size::new(100.0, 150.0),
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizePreset::Square => f.write_str("square"),
            SizePreset::Tall => f.write_str("tall"),
        }
    }
}

impl FromStr for SizePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(SizePreset::Square),
            "tall" => Ok(SizePreset::Tall),
            other => Err(format!("unknown size preset '{other}' (expected square or tall)")),
        }
    }
}

/// One demo frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Area the image is drawn in; its center is the default fixed point
    pub view: Rect,
    /// Pre-rotation image size
    pub size: Size,
    /// Rotation angle in degrees (counter-clockwise positive)
    pub angle: f64,
    pub anchor: Anchor,
    /// Where the anchor is pinned; `None` means the view center
    pub fixed_point: Option<Point>,
    pub draw_guides: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            view: Rect::new(0.0, 0.0, 480.0, 320.0),
            size: SizePreset::Square.size(),
            angle: 0.0,
            anchor: Anchor::Center,
            fixed_point: None,
            draw_guides: true,
        }
    }
}

/// Solver output for a scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub destination: RotationResult,
    pub guides: GuideSet,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlScene {
    view: Option<TomlView>,
    image: Option<TomlImage>,
    rotation: Option<TomlRotation>,
    guides: Option<TomlGuides>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlView {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    width: Spanned<f64>,
    height: Spanned<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlImage {
    preset: Option<SizePreset>,
    width: Option<Spanned<f64>>,
    height: Option<Spanned<f64>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRotation {
    angle: Option<Spanned<f64>>,
    anchor: Option<Anchor>,
    fixed_point: Option<Spanned<[f64; 2]>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlGuides {
    enabled: bool,
}

fn positive(value: &Spanned<f64>, field: &'static str) -> Result<f64, SceneError> {
    let v = *value.get_ref();
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(SceneError::invalid(
            field,
            format!("must be a finite number greater than 0, got {v}"),
            Some(value.span()),
        ))
    }
}

fn finite(value: &Spanned<f64>, field: &'static str) -> Result<f64, SceneError> {
    let v = *value.get_ref();
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SceneError::invalid(
            field,
            format!("must be finite, got {v}"),
            Some(value.span()),
        ))
    }
}

impl Scene {
    /// Create a scene with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        log::debug!("loading scene from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;
        let mut scene = Scene::default();

        if let Some(view) = parsed.view {
            scene.view = Rect::new(
                view.x,
                view.y,
                positive(&view.width, "view width")?,
                positive(&view.height, "view height")?,
            );
        }

        if let Some(image) = parsed.image {
            if let Some(preset) = image.preset {
                scene.size = preset.size();
            }
            if let Some(width) = &image.width {
                scene.size.width = positive(width, "image width")?;
            }
            if let Some(height) = &image.height {
                scene.size.height = positive(height, "image height")?;
            }
        }

        if let Some(rotation) = parsed.rotation {
            if let Some(angle) = &rotation.angle {
                scene.angle = finite(angle, "angle")?;
            }
            if let Some(anchor) = rotation.anchor {
                scene.anchor = anchor;
            }
            if let Some(point) = rotation.fixed_point {
                let [x, y] = *point.get_ref();
                if !(x.is_finite() && y.is_finite()) {
                    return Err(SceneError::invalid(
                        "fixed point",
                        format!("coordinates must be finite, got [{x}, {y}]"),
                        Some(point.span()),
                    ));
                }
                scene.fixed_point = Some(Point::new(x, y));
            }
        }

        if let Some(guides) = parsed.guides {
            scene.draw_guides = guides.enabled;
        }

        log::debug!(
            "scene: image {}x{}, angle {}, anchor {}",
            scene.size.width,
            scene.size.height,
            scene.angle,
            scene.anchor
        );
        Ok(scene)
    }

    /// Set the view rectangle
    pub fn with_view(mut self, view: Rect) -> Self {
        self.view = view;
        self
    }

    /// Set the pre-rotation image size
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the image size from a preset
    pub fn with_preset(mut self, preset: SizePreset) -> Self {
        self.size = preset.size();
        self
    }

    /// Set the rotation angle in degrees
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Pin the anchor at a point instead of the view center
    pub fn with_fixed_point(mut self, point: Point) -> Self {
        self.fixed_point = Some(point);
        self
    }

    /// Enable or disable the guide overlay
    pub fn with_guides(mut self, draw_guides: bool) -> Self {
        self.draw_guides = draw_guides;
        self
    }

    /// Point the anchor is pinned to
    pub fn fixed_point(&self) -> Point {
        self.fixed_point.unwrap_or_else(|| self.view.center())
    }

    /// Check the solver preconditions for values set outside of TOML
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.view.size().is_positive() {
            return Err(SceneError::invalid(
                "view size",
                format!(
                    "must be finite and greater than 0, got {}x{}",
                    self.view.width, self.view.height
                ),
                None,
            ));
        }
        if !self.size.is_positive() {
            return Err(SceneError::invalid(
                "image size",
                format!(
                    "must be finite and greater than 0, got {}x{}",
                    self.size.width, self.size.height
                ),
                None,
            ));
        }
        if !self.angle.is_finite() {
            return Err(SceneError::invalid(
                "angle",
                format!("must be finite, got {}", self.angle),
                None,
            ));
        }
        let fixed = self.fixed_point();
        if !(fixed.x.is_finite() && fixed.y.is_finite()) {
            return Err(SceneError::invalid(
                "fixed point",
                format!("coordinates must be finite, got [{}, {}]", fixed.x, fixed.y),
                None,
            ));
        }
        Ok(())
    }

    /// Compute the destination rectangle and, if enabled, the guides
    pub fn solve(&self) -> Frame {
        let destination =
            compute_destination(self.size, self.angle, self.anchor, self.fixed_point());

        let guides = if self.draw_guides {
            GuideSet::for_frame(
                &self.view,
                &destination.rect(),
                destination.image_outline(self.size, self.angle),
            )
        } else {
            GuideSet::new()
        };

        Frame {
            destination,
            guides,
        }
    }
}
