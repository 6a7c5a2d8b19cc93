// File: crates/chart-core/src/selection.rs
// Summary: Selection and tooltip helpers: validate a pressed slot and place its tooltip.

use serde::Serialize;

use crate::config::TooltipLayout;
use crate::format::format_number;
use crate::prepare::PreparedChart;
use crate::series::Color;

/// Accept `index` only when it is in range and at least one series has a value there.
pub fn select_index(chart: &PreparedChart, index: usize) -> Option<usize> {
    if index >= chart.slot_count() {
        return None;
    }
    let any_value = chart.series.iter().any(|s| !s.points[index].is_empty);
    any_value.then_some(index)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipEntry {
    pub series: String,
    pub color: Color,
    pub title: Option<String>,
    pub value_text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub index: usize,
    pub entries: Vec<TooltipEntry>,
}

/// Tooltip content for slot `index`; series without a color use `primary`.
pub fn tooltip(chart: &PreparedChart, index: usize, primary: Color) -> Option<Tooltip> {
    if index >= chart.slot_count() {
        return None;
    }
    let entries = chart
        .series
        .iter()
        .map(|s| {
            let p = &s.points[index];
            TooltipEntry {
                series: s.name.clone(),
                color: s.color_or(primary),
                title: p.label.clone(),
                value_text: format_number(p.value, false),
            }
        })
        .collect();
    Some(Tooltip { index, entries })
}

/// Left edge of the column chart tooltip for slot `index`.
pub fn column_tooltip_left(chart: &PreparedChart, index: usize, layout: &TooltipLayout) -> Option<f64> {
    let reference = chart.series.first()?;
    let point = reference.points.get(index)?;
    let n = chart.series.len();
    let shift = if n == 1 {
        0.0
    } else if index == reference.len() - 1 {
        layout.last_index_shift
    } else {
        layout.per_series_shift * n as f64
    };
    Some(point.horizontal_offset + shift + layout.base_offset)
}

/// Vertical highlight placed on a selected line chart slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SelectionMarker {
    pub left: f64,
    /// Offset of the highlight line from `left`.
    pub gap: f64,
    /// Tooltip box opens above the point; false when the point sits in the top third.
    pub above: bool,
}

/// Marker for slot `index` of the reference series. On the last slot the marker is
/// anchored to the previous point so the tooltip stays inside the scroll area.
pub fn line_selection_marker(chart: &PreparedChart, index: usize, height: f64) -> Option<SelectionMarker> {
    let points = &chart.series.first()?.points;
    let point = points.get(index)?;
    let (left, gap) = if index == points.len() - 1 && index != 0 {
        let prev = points[index - 1].horizontal_offset;
        (prev, point.horizontal_offset - prev)
    } else {
        (point.horizontal_offset, 0.0)
    };
    let above = point.vertical_offset <= height * 2.0 / 3.0;
    Some(SelectionMarker { left, gap, above })
}
