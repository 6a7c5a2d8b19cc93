// File: crates/chart-core/src/chart.rs
// Summary: Chart facade: picks column or line layout from the config and prepares geometry.

use serde::{Deserialize, Serialize};

use crate::axis::{x_axis_labels, y_axis_labels, XAxisLabel, YAxisLabel};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::geometry::{column_rects, line_segments, point_markers, LineSegment, MarkerStyle, PointMarker, RectF};
use crate::prepare::{prepare_with, PrepareOptions, PreparedChart};
use crate::scale::IndexScale;
use crate::selection::{column_tooltip_left, line_selection_marker, select_index, tooltip, SelectionMarker, Tooltip};
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Column,
    Line,
}

/// Where the host should draw the tooltip for a selected slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TooltipAnchor {
    Column { left: f64 },
    Line(SelectionMarker),
}

pub struct Chart {
    pub kind: ChartKind,
    pub config: ChartConfig,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, config: ChartConfig::default() }
    }

    pub fn with_config(kind: ChartKind, config: ChartConfig) -> Self {
        Self { kind, config }
    }

    /// Horizontal distance between adjacent slots for this chart kind.
    pub fn gap(&self) -> f64 {
        match self.kind {
            ChartKind::Column => self.config.column_gap(),
            ChartKind::Line => self.config.line_gap,
        }
    }

    pub fn options(&self) -> PrepareOptions {
        PrepareOptions::new(self.config.height, self.gap(), self.config.guide_line_count)
            .with_leading_margin(self.config.leading_margin)
            .with_order(self.config.series_order)
    }

    /// Prepare `series` for one render pass.
    pub fn prepare(&self, series: &[Series]) -> Result<PreparedChart> {
        prepare_with(series, &self.options())
    }

    pub fn x_labels(&self, prepared: &PreparedChart) -> Vec<XAxisLabel> {
        match prepared.series.first() {
            Some(reference) => x_axis_labels(
                &reference.points,
                self.gap(),
                self.config.show_even_number_x_axis_label,
                self.config.x_label_min_width,
            ),
            None => Vec::new(),
        }
    }

    pub fn y_labels(&self, prepared: &PreparedChart) -> Vec<YAxisLabel> {
        y_axis_labels(&prepared.guide_lines, &self.config.y_axis_symbol)
    }

    /// Column rectangles for every slot, one inner vec per slot.
    pub fn columns(&self, prepared: &PreparedChart) -> Vec<Vec<RectF>> {
        (0..prepared.slot_count())
            .map(|i| column_rects(prepared, i, self.config.column_width))
            .collect()
    }

    /// Line segments and point markers, one entry per series. The marker at `selected`
    /// takes the selected color; `hide_points` suppresses markers entirely.
    pub fn lines(&self, prepared: &PreparedChart, selected: Option<usize>) -> Vec<(Vec<LineSegment>, Vec<PointMarker>)> {
        let thickness = self.config.effective_line_thickness();
        prepared
            .series
            .iter()
            .map(|s| {
                let markers = if self.config.hide_points {
                    Vec::new()
                } else {
                    let style = MarkerStyle {
                        size: self.config.point_size,
                        thickness,
                        color: s.color_or(self.config.primary_color),
                        selected_color: self.config.selected_color,
                    };
                    point_markers(s, &style, selected)
                };
                (line_segments(s, self.gap()), markers)
            })
            .collect()
    }

    /// A slot the user may select. Line charts also refuse slots where every series
    /// is empty; column charts accept any slot in range.
    pub fn selectable(&self, prepared: &PreparedChart, index: usize) -> Option<usize> {
        match self.kind {
            ChartKind::Line => select_index(prepared, index),
            ChartKind::Column => (index < prepared.slot_count()).then_some(index),
        }
    }

    /// Map a press at `x_px` to a selectable slot.
    pub fn hit_test(&self, prepared: &PreparedChart, x_px: f64) -> Option<usize> {
        let scale = IndexScale::new(self.config.leading_margin, self.gap());
        let index = scale.index_at(x_px, prepared.slot_count())?;
        self.selectable(prepared, index)
    }

    pub fn tooltip(&self, prepared: &PreparedChart, index: usize) -> Option<Tooltip> {
        let index = self.selectable(prepared, index)?;
        tooltip(prepared, index, self.config.primary_color)
    }

    pub fn tooltip_anchor(&self, prepared: &PreparedChart, index: usize) -> Option<TooltipAnchor> {
        let index = self.selectable(prepared, index)?;
        match self.kind {
            ChartKind::Column => column_tooltip_left(prepared, index, &self.config.tooltip)
                .map(|left| TooltipAnchor::Column { left }),
            ChartKind::Line => line_selection_marker(prepared, index, self.config.height).map(TooltipAnchor::Line),
        }
    }
}
