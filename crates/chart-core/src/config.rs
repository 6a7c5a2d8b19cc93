// File: crates/chart-core/src/config.rs
// Summary: Chart configuration with explicit defaults (sizes, gaps, colors, label rules).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::Color;

/// Default chart pixel height.
pub const HEIGHT: f64 = 100.0;
/// Default pixel gap between line chart points.
pub const LINE_GAP: f64 = 60.0;
/// Default column width and the margin after each column.
pub const COLUMN_WIDTH: f64 = 40.0;
pub const COLUMN_MARGIN: f64 = 20.0;
/// Default number of horizontal guide lines.
pub const GUIDE_LINE_COUNT: usize = 5;
/// Line thickness is clamped to this many pixels.
pub const MAX_LINE_THICKNESS: f64 = 10.0;
pub const PRIMARY_COLOR: Color = Color::from_rgb(0x29, 0x7a, 0xb1);
/// Marker color of the selected line chart point.
pub const SELECTED_COLOR: Color = Color::from_rgb(0xff, 0x00, 0x00);

/// Order applied to prepared series. `Input` keeps caller order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOrder {
    #[default]
    Input,
    NameAscending,
    /// Series with the largest non-empty value first.
    PeakDescending,
}

/// Tooltip placement offsets for the column chart.
/// Contract: `left = offset + shift`, where shift depends on series count and index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipLayout {
    pub base_offset: f64,
    pub last_index_shift: f64,
    pub per_series_shift: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self { base_offset: 60.0, last_index_shift: -50.0, per_series_shift: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub height: f64,
    pub line_gap: f64,
    pub column_width: f64,
    pub column_margin: f64,
    pub guide_line_count: usize,
    pub leading_margin: f64,
    pub series_order: SeriesOrder,
    pub primary_color: Color,
    pub selected_color: Color,
    /// Show x labels on odd indices only.
    pub show_even_number_x_axis_label: bool,
    pub x_label_min_width: f64,
    pub y_axis_symbol: String,
    pub point_size: f64,
    pub hide_points: bool,
    pub line_thickness: f64,
    pub tooltip: TooltipLayout,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: HEIGHT,
            line_gap: LINE_GAP,
            column_width: COLUMN_WIDTH,
            column_margin: COLUMN_MARGIN,
            guide_line_count: GUIDE_LINE_COUNT,
            leading_margin: 0.0,
            series_order: SeriesOrder::Input,
            primary_color: PRIMARY_COLOR,
            selected_color: SELECTED_COLOR,
            show_even_number_x_axis_label: true,
            x_label_min_width: 70.0,
            y_axis_symbol: String::new(),
            point_size: 10.0,
            hide_points: false,
            line_thickness: 1.0,
            tooltip: TooltipLayout::default(),
        }
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Column slot width: column plus its margin.
    pub fn column_gap(&self) -> f64 {
        self.column_width + self.column_margin
    }

    pub fn effective_line_thickness(&self) -> f64 {
        self.line_thickness.min(MAX_LINE_THICKNESS)
    }
}
