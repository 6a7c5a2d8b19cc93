// File: crates/chart-core/src/series.rs
// Summary: Series model for column and line charts: raw points, prepared points, colors.
// Notes:
// - Series share one index space; point i of every series lands in the same slot.
// - Empty points keep their slot but are skipped when computing the maximum.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// RGBA color parsed from `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string. The leading `#` is required.
    pub fn parse_hex(s: &str) -> Result<Self> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ChartError::invalid(format!("color '{s}' must start with '#'")))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::invalid(format!("color '{s}' has non-hex digits")));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        let nibble = |i: usize| {
            let v = u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
            v * 17
        };
        match hex.len() {
            3 => Ok(Self::from_rgb(nibble(0), nibble(1), nibble(2))),
            6 => Ok(Self::from_rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self::from_rgba(byte(0), byte(2), byte(4), byte(6))),
            n => Err(ChartError::invalid(format!("color '{s}' has {n} hex digits, expected 3, 6 or 8"))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self> {
        Self::parse_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// One raw data point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub is_empty: bool,
}

impl Point {
    pub fn new(value: f64) -> Self {
        Self { label: None, value, is_empty: false }
    }

    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self { label: Some(label.into()), value, is_empty: false }
    }

    /// Placeholder that keeps its slot but carries no value.
    pub fn empty() -> Self {
        Self { label: None, value: 0.0, is_empty: true }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One named sequence of values plotted together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default)]
    pub color: Option<Color>,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: None, points: Vec::new() }
    }

    pub fn with_points(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), color: None, points }
    }

    /// Convenience for unlabeled, non-empty values.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::with_points(name, values.iter().copied().map(Point::new).collect())
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Largest non-empty value, if any.
    pub fn peak(&self) -> Option<f64> {
        self.points
            .iter()
            .filter(|p| !p.is_empty)
            .map(|p| p.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

/// A point annotated with its pixel position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreparedPoint {
    pub label: Option<String>,
    pub value: f64,
    pub is_empty: bool,
    /// Left pixel position along the shared axis.
    pub horizontal_offset: f64,
    /// Pixel height scaled against the chart maximum.
    pub vertical_offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreparedSeries {
    pub name: String,
    pub color: Option<Color>,
    pub points: Vec<PreparedPoint>,
}

impl PreparedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Series color, falling back to `primary` when unset.
    pub fn color_or(&self, primary: Color) -> Color {
        self.color.unwrap_or(primary)
    }
}
