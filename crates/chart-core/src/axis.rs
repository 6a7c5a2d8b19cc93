// File: crates/chart-core/src/axis.rs
// Summary: Axis label layout: x labels per slot, y labels per guide line.

use serde::Serialize;

use crate::format::format_compact;
use crate::prepare::GuideLine;
use crate::series::PreparedPoint;

/// Label under a slot, centred on the point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XAxisLabel {
    pub index: usize,
    pub text: String,
    pub left: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YAxisLabel {
    pub text: String,
    pub pixel_offset: f64,
}

/// X labels for the points of the reference (first) series.
///
/// Points without label text are skipped; with `only_odd` every other slot is
/// skipped too, starting from index 0.
pub fn x_axis_labels(points: &[PreparedPoint], gap: f64, only_odd: bool, min_width: f64) -> Vec<XAxisLabel> {
    let width = gap.max(min_width);
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| !only_odd || i % 2 == 1)
        .filter_map(|(i, p)| {
            let text = p.label.as_deref().filter(|t| !t.is_empty())?;
            Some(XAxisLabel {
                index: i,
                text: text.to_string(),
                left: p.horizontal_offset - gap / 2.0,
                width,
            })
        })
        .collect()
}

/// One label per guide line, formatted compactly with an optional unit `symbol`.
pub fn y_axis_labels(guides: &[GuideLine], symbol: &str) -> Vec<YAxisLabel> {
    guides
        .iter()
        .map(|g| YAxisLabel { text: format!("{}{}", format_compact(g.value), symbol), pixel_offset: g.pixel_offset })
        .collect()
}
