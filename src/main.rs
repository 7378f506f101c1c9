//! Anchor Rotate CLI
//!
//! Usage:
//!   anchor-rotate [OPTIONS] [SCENE]
//!
//! Options:
//!   -p, --preset <NAME>   Image size preset (square, tall)
//!   -s, --size <WxH>      Explicit image size
//!   -a, --angle <DEG>     Rotation angle in degrees
//!   -n, --anchor <NAME>   Anchor kept fixed during rotation
//!       --at <X,Y>        Point the anchor is pinned to
//!   -g, --guides <BOOL>   Include guide segments
//!   -f, --format <FMT>    Output format (text, toml)
//!   -d, --debug           Verbose logging
//!   -h, --help            Print help

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use anchor_rotate::{
    format_text, format_toml, Anchor, Point, ReportFormat, Scene, Size, SizePreset,
};

#[derive(Parser)]
#[command(name = "anchor-rotate")]
#[command(about = "Rotate a rectangle while keeping one of its anchors fixed")]
struct Cli {
    /// Scene file (TOML); flags override its values
    scene: Option<PathBuf>,

    /// Image size preset: square (100x100) or tall (100x150)
    #[arg(short, long)]
    preset: Option<SizePreset>,

    /// Image size as WIDTHxHEIGHT, e.g. 120x80
    #[arg(short, long, value_parser = parse_size, conflicts_with = "preset")]
    size: Option<Size>,

    /// Rotation angle in degrees (counter-clockwise positive)
    #[arg(short, long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Anchor kept fixed: top-left, top, top-right, left, center, right,
    /// bottom-left, bottom, bottom-right
    #[arg(short = 'n', long)]
    anchor: Option<Anchor>,

    /// Point the anchor is pinned to, as X,Y (defaults to the view center)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    at: Option<Point>,

    /// Include guide segments in the report
    #[arg(short, long)]
    guides: Option<bool>,

    /// Output format: text or toml
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Debug mode: log scene loading and solver steps
    #[arg(short, long)]
    debug: bool,
}

fn parse_pair(s: &str, sep: &[char]) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(sep)
        .ok_or_else(|| format!("expected two numbers separated by {sep:?}, got '{s}'"))?;
    let a: f64 = a.trim().parse().map_err(|e| format!("'{a}': {e}"))?;
    let b: f64 = b.trim().parse().map_err(|e| format!("'{b}': {e}"))?;
    Ok((a, b))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (width, height) = parse_pair(s, &['x', 'X'])?;
    Ok(Size::new(width, height))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = parse_pair(s, &[','])?;
    Ok(Point::new(x, y))
}

fn load_scene(path: &Path) -> Result<Scene, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading scene '{}': {}", path.display(), e))?;
    let filename = path.display().to_string();
    Scene::from_toml(&source).map_err(|e| e.format(&source, &filename))
}

fn run(cli: Cli) -> Result<String, String> {
    let mut scene = match &cli.scene {
        Some(path) => load_scene(path)?,
        None => Scene::default(),
    };

    if let Some(preset) = cli.preset {
        scene = scene.with_preset(preset);
    }
    if let Some(size) = cli.size {
        scene = scene.with_size(size);
    }
    if let Some(angle) = cli.angle {
        scene = scene.with_angle(angle);
    }
    if let Some(anchor) = cli.anchor {
        scene = scene.with_anchor(anchor);
    }
    if let Some(at) = cli.at {
        scene = scene.with_fixed_point(at);
    }
    if let Some(guides) = cli.guides {
        scene = scene.with_guides(guides);
    }

    scene.validate().map_err(|e| format!("Error: {e}"))?;

    let frame = scene.solve();
    log::debug!("destination rect: {:?}", frame.destination.rect());

    match cli.format {
        ReportFormat::Text => Ok(format_text(&scene, &frame)),
        ReportFormat::Toml => {
            format_toml(&scene, &frame).map_err(|e| format!("Error writing TOML: {e}"))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --debug raises the default filter; RUST_LOG still wins
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    match run(cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
