//! The nine image-relative anchors
//!
//! An anchor names a point on the original, unrotated rectangle: one of the
//! four corners, one of the four edge midpoints, or the center. The set is
//! closed, and every consumer matches on it exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named reference point on the unrotated rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// All anchors in row-major order, top row first
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];

    /// Kebab-case name used in scene files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::Top => "top",
            Anchor::TopRight => "top-right",
            Anchor::Left => "left",
            Anchor::Center => "center",
            Anchor::Right => "right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::Bottom => "bottom",
            Anchor::BottomRight => "bottom-right",
        }
    }

    /// Position relative to the rectangle center, as fractions of its width and
    /// height. `y` is up-positive, so `Top` is `(0.0, 0.5)`.
    pub fn factors(&self) -> (f64, f64) {
        match self {
            Anchor::TopLeft => (-0.5, 0.5),
            Anchor::Top => (0.0, 0.5),
            Anchor::TopRight => (0.5, 0.5),
            Anchor::Left => (-0.5, 0.0),
            Anchor::Center => (0.0, 0.0),
            Anchor::Right => (0.5, 0.0),
            Anchor::BottomLeft => (-0.5, -0.5),
            Anchor::Bottom => (0.0, -0.5),
            Anchor::BottomRight => (0.5, -0.5),
        }
    }

    /// True for the four corner anchors
    pub fn is_corner(&self) -> bool {
        let (fx, fy) = self.factors();
        fx != 0.0 && fy != 0.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An anchor name that does not match any of the nine anchors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown anchor '{name}'{}", format_suggestions(.suggestions))]
pub struct ParseAnchorError {
    pub name: String,
    pub suggestions: Vec<String>,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    /// Accepts kebab, snake and camel case, case-insensitively, with an
    /// optional `image` prefix: `top-left`, `top_left`, `topLeft`,
    /// `imageTopLeft` all name [`Anchor::TopLeft`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        let key = key.strip_prefix("image").unwrap_or(&key);
        let anchor = match key {
            "topleft" => Anchor::TopLeft,
            "top" => Anchor::Top,
            "topright" => Anchor::TopRight,
            "left" => Anchor::Left,
            "center" | "centre" => Anchor::Center,
            "right" => Anchor::Right,
            "bottomleft" => Anchor::BottomLeft,
            "bottom" => Anchor::Bottom,
            "bottomright" => Anchor::BottomRight,
            _ => {
                return Err(ParseAnchorError {
                    name: s.to_string(),
                    suggestions: find_similar(key, 3),
                })
            }
        };
        Ok(anchor)
    }
}

impl TryFrom<String> for Anchor {
    type Error = ParseAnchorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Anchor names within `max_distance` edits of a normalized key, closest first
fn find_similar(key: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&'static str, usize)> = Anchor::ALL
        .iter()
        .filter_map(|anchor| {
            let dist = levenshtein_distance(&normalize(anchor.as_str()), key);
            (dist <= max_distance).then_some((anchor.as_str(), dist))
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
