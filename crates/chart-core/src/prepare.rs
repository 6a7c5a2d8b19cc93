// File: crates/chart-core/src/prepare.rs
// Summary: Data preparation: validate series, compute maximum, pixel offsets and guide lines.

use serde::Serialize;

use crate::config::SeriesOrder;
use crate::error::{ChartError, Result};
use crate::grid::guide_fractions;
use crate::scale::{IndexScale, ValueScale};
use crate::series::{PreparedPoint, PreparedSeries, Series};

/// Horizontal reference line at a fixed value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GuideLine {
    pub value: f64,
    pub pixel_offset: f64,
    /// `pixel_offset / value`, or 0 when `value` is not positive.
    pub scale_ratio: f64,
}

/// Render-ready geometry for one pass. Immutable once produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PreparedChart {
    pub series: Vec<PreparedSeries>,
    pub maximum: f64,
    pub guide_lines: Vec<GuideLine>,
}

impl PreparedChart {
    /// Number of shared slots (points per series).
    pub fn slot_count(&self) -> usize {
        self.series.first().map_or(0, PreparedSeries::len)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Layout inputs for [`prepare_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrepareOptions {
    pub available_height: f64,
    pub gap: f64,
    pub guide_line_count: usize,
    pub leading_margin: f64,
    pub order: SeriesOrder,
}

impl PrepareOptions {
    pub fn new(available_height: f64, gap: f64, guide_line_count: usize) -> Self {
        Self { available_height, gap, guide_line_count, leading_margin: 0.0, order: SeriesOrder::Input }
    }

    pub fn with_leading_margin(mut self, leading_margin: f64) -> Self {
        self.leading_margin = leading_margin;
        self
    }

    pub fn with_order(mut self, order: SeriesOrder) -> Self {
        self.order = order;
        self
    }
}

/// Prepare `series` with no leading margin and input order preserved.
pub fn prepare(
    series: &[Series],
    available_height: f64,
    gap: f64,
    guide_line_count: usize,
) -> Result<PreparedChart> {
    prepare_with(series, &PrepareOptions::new(available_height, gap, guide_line_count))
}

/// Transform raw series plus layout parameters into pixel geometry.
///
/// An empty `series` slice is not an error: it yields an empty chart with
/// `maximum == 0` and no guide lines, before any layout validation.
pub fn prepare_with(series: &[Series], opts: &PrepareOptions) -> Result<PreparedChart> {
    if series.is_empty() {
        return Ok(PreparedChart::default());
    }
    validate_layout(opts)?;
    let slots = validate_shape(series)?;

    let maximum = series.iter().filter_map(Series::peak).fold(0.0_f64, f64::max);
    let x = IndexScale::new(opts.leading_margin, opts.gap);
    let y = ValueScale::new(maximum, opts.available_height);

    let mut prepared: Vec<PreparedSeries> = series
        .iter()
        .map(|s| PreparedSeries {
            name: s.name.clone(),
            color: s.color,
            points: s
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| PreparedPoint {
                    label: p.label.clone(),
                    value: p.value,
                    is_empty: p.is_empty,
                    horizontal_offset: x.to_px(i),
                    vertical_offset: if p.is_empty { 0.0 } else { y.to_px(p.value) },
                })
                .collect(),
        })
        .collect();
    sort_series(&mut prepared, opts.order);

    let guide_lines = guide_lines(maximum, opts.available_height, opts.guide_line_count);

    tracing::debug!(
        series = prepared.len(),
        slots,
        maximum,
        guides = guide_lines.len(),
        "prepared chart data"
    );
    Ok(PreparedChart { series: prepared, maximum, guide_lines })
}

/// Guide `k` of `count` sits at `k / count` of both the value range and the height.
pub fn guide_lines(maximum: f64, available_height: f64, count: usize) -> Vec<GuideLine> {
    guide_fractions(count)
        .map(|f| {
            let value = maximum * f;
            let pixel_offset = available_height * f;
            let scale_ratio = if value > 0.0 { pixel_offset / value } else { 0.0 };
            GuideLine { value, pixel_offset, scale_ratio }
        })
        .collect()
}

fn validate_layout(opts: &PrepareOptions) -> Result<()> {
    if !(opts.available_height.is_finite() && opts.available_height > 0.0) {
        return Err(ChartError::invalid(format!(
            "available height must be positive, got {}",
            opts.available_height
        )));
    }
    if !(opts.gap.is_finite() && opts.gap > 0.0) {
        return Err(ChartError::invalid(format!("gap must be positive, got {}", opts.gap)));
    }
    if !opts.leading_margin.is_finite() {
        return Err(ChartError::invalid("leading margin must be finite"));
    }
    Ok(())
}

/// Returns the shared point count.
fn validate_shape(series: &[Series]) -> Result<usize> {
    let expected = series[0].points.len();
    for (si, s) in series.iter().enumerate() {
        if s.points.len() != expected {
            return Err(ChartError::invalid(format!(
                "series {si} ('{}') has {} points, expected {expected}",
                s.name,
                s.points.len()
            )));
        }
        if let Some(pi) = s.points.iter().position(|p| !p.is_empty && !p.value.is_finite()) {
            return Err(ChartError::invalid(format!(
                "series {si} ('{}') point {pi} has non-finite value {}",
                s.name, s.points[pi].value
            )));
        }
    }
    Ok(expected)
}

fn sort_series(series: &mut [PreparedSeries], order: SeriesOrder) {
    let peak = |s: &PreparedSeries| {
        s.points
            .iter()
            .filter(|p| !p.is_empty)
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max)
    };
    match order {
        SeriesOrder::Input => {}
        SeriesOrder::NameAscending => series.sort_by(|a, b| a.name.cmp(&b.name)),
        SeriesOrder::PeakDescending => series.sort_by(|a, b| peak(b).total_cmp(&peak(a))),
    }
}
