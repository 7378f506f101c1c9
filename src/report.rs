//! Plain-text and TOML reports of a solved frame

use std::fmt::Write;

use serde::Serialize;

use crate::geometry::{Point, Size};
use crate::guide::{GuideKind, GuideSet};
use crate::scene::{Frame, Scene};
use crate::solver::RotationResult;

/// Output format of the CLI report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Toml,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "toml" => Ok(ReportFormat::Toml),
            other => Err(format!("unknown format '{other}' (expected text or toml)")),
        }
    }
}

/// Two decimals, without a negative sign on values that round to zero
fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

fn point(p: Point) -> String {
    format!("({}, {})", num(p.x), num(p.y))
}

fn size(s: Size) -> String {
    format!("{} x {}", num(s.width), num(s.height))
}

fn kind_label(kind: GuideKind) -> &'static str {
    match kind {
        GuideKind::Crosshair => "crosshair",
        GuideKind::Destination => "destination",
        GuideKind::Image => "image",
    }
}

/// Human-readable summary of a solved scene
pub fn format_text(scene: &Scene, frame: &Frame) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "image        {}", size(scene.size));
    let _ = writeln!(out, "angle        {} deg", num(scene.angle));
    let _ = writeln!(
        out,
        "anchor       {} at {}",
        scene.anchor,
        point(scene.fixed_point())
    );
    let _ = writeln!(out, "origin       {}", point(frame.destination.origin));
    let _ = writeln!(out, "size         {}", size(frame.destination.size));

    if !frame.guides.is_empty() {
        let _ = writeln!(out, "guides");
        for guide in &frame.guides.guides {
            let _ = writeln!(
                out,
                "  {:<12} {} -> {}",
                kind_label(guide.kind),
                point(guide.segment.from),
                point(guide.segment.to)
            );
        }
    }
    out
}

#[derive(Serialize)]
struct TomlReport<'a> {
    anchor: String,
    angle: f64,
    fixed_point: Point,
    image: Size,
    destination: &'a RotationResult,
    #[serde(skip_serializing_if = "no_guides")]
    guides: &'a GuideSet,
}

fn no_guides(guides: &&GuideSet) -> bool {
    guides.is_empty()
}

/// Machine-readable report
pub fn format_toml(scene: &Scene, frame: &Frame) -> Result<String, toml::ser::Error> {
    let report = TomlReport {
        anchor: scene.anchor.to_string(),
        angle: scene.angle,
        fixed_point: scene.fixed_point(),
        image: scene.size,
        destination: &frame.destination,
        guides: &frame.guides,
    };
    toml::to_string_pretty(&report)
}
