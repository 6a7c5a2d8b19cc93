// File: crates/chart-core/src/geometry.rs
// Summary: Pixel geometry derived from prepared data: column rects, line segments, point markers.

use serde::Serialize;

use crate::prepare::PreparedChart;
use crate::series::{Color, PreparedSeries};

/// Axis-aligned rectangle in chart pixels; `bottom` is measured up from the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RectF {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn from_lbwh(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self { left, bottom, width, height }
    }
    pub fn right(&self) -> f64 { self.left + self.width }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// One column per series at slot `index`. The slot's `column_width` is split evenly
/// between series; empty points produce a zero-height column.
pub fn column_rects(chart: &PreparedChart, index: usize, column_width: f64) -> Vec<RectF> {
    let n = chart.series.len();
    if n == 0 || index >= chart.slot_count() {
        return Vec::new();
    }
    let w = column_width / n as f64;
    chart
        .series
        .iter()
        .enumerate()
        .map(|(si, s)| {
            let p = &s.points[index];
            let h = if p.is_empty { 0.0 } else { p.vertical_offset };
            RectF::from_lbwh(p.horizontal_offset + si as f64 * w, 0.0, w, h)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Rising,
    Falling,
}

/// Straight piece of a line series between two slots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineSegment {
    pub index: usize,
    pub start_x: f64,
    pub start_y: f64,
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
    /// Screen rotation (y grows downwards), i.e. `-atan2(dy, dx)`.
    pub angle_rad: f64,
    pub direction: Direction,
    /// Either end is an empty point, or this is the trailing stub.
    pub blank: bool,
}

impl LineSegment {
    fn between(index: usize, x0: f64, y0: f64, x1: f64, y1: f64, blank: bool) -> Self {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let direction = if y0 > y1 { Direction::Falling } else { Direction::Rising };
        Self {
            index,
            start_x: x0,
            start_y: y0,
            dx,
            dy,
            length: dx.hypot(dy),
            angle_rad: -dy.atan2(dx),
            direction,
            blank,
        }
    }
}

/// Segments joining consecutive points, plus a flat blank stub of width `gap`
/// after the last point so the final slot stays pressable.
pub fn line_segments(series: &PreparedSeries, gap: f64) -> Vec<LineSegment> {
    let pts = &series.points;
    let Some(last) = pts.last() else {
        return Vec::new();
    };
    let mut out: Vec<LineSegment> = pts
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let (a, b) = (&w[0], &w[1]);
            LineSegment::between(
                i,
                a.horizontal_offset,
                a.vertical_offset,
                b.horizontal_offset,
                b.vertical_offset,
                a.is_empty || b.is_empty,
            )
        })
        .collect();
    out.push(LineSegment::between(
        pts.len() - 1,
        last.horizontal_offset,
        last.vertical_offset,
        last.horizontal_offset + gap,
        last.vertical_offset,
        true,
    ));
    out
}

/// Dot drawn on a line chart point; `left`/`bottom` position its bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointMarker {
    pub index: usize,
    pub left: f64,
    pub bottom: f64,
    pub diameter: f64,
    pub color: Color,
    pub selected: bool,
}

/// Marker sizing and colors for one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub size: f64,
    pub thickness: f64,
    pub color: Color,
    pub selected_color: Color,
}

/// Markers for every non-empty point; the marker at `selected` takes the selected color.
pub fn point_markers(series: &PreparedSeries, style: &MarkerStyle, selected: Option<usize>) -> Vec<PointMarker> {
    series
        .points
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_empty)
        .map(|(i, p)| {
            let is_selected = selected == Some(i);
            PointMarker {
                index: i,
                left: p.horizontal_offset - style.size / 2.0,
                bottom: p.vertical_offset - style.size / 2.0,
                diameter: style.size + style.thickness - 2.0,
                color: if is_selected { style.selected_color } else { style.color },
                selected: is_selected,
            }
        })
        .collect()
}
