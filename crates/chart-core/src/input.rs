// File: crates/chart-core/src/input.rs
// Summary: Loose JSON input: plain values, [label, value] pairs, {x, y} objects or series objects.

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::series::{Color, Point, Series};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Num(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Value(Option<RawScalar>),
    Pair(Option<RawScalar>, Option<RawScalar>),
    Object {
        #[serde(default)]
        x: Option<RawScalar>,
        #[serde(default)]
        y: Option<RawScalar>,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeries {
    #[serde(default)]
    series_name: Option<String>,
    data: Vec<RawPoint>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawData {
    Series(Vec<RawSeries>),
    Points(Vec<RawPoint>),
}

/// Parse chart data in any of the accepted JSON shapes into a list of series.
///
/// A bare array of points becomes a single series named "Series 1". `null` values become
/// empty points; numeric strings are parsed.
pub fn parse_series_json(s: &str) -> Result<Vec<Series>> {
    let raw: RawData = serde_json::from_str(s)?;
    match raw {
        RawData::Series(list) => list
            .into_iter()
            .enumerate()
            .map(|(i, rs)| -> Result<Series> {
                let name = rs.series_name.unwrap_or_else(|| default_name(i));
                let color = rs.color.as_deref().map(Color::parse_hex).transpose()?;
                let points = convert_points(&name, rs.data)?;
                Ok(Series { name, color, points })
            })
            .collect(),
        RawData::Points(points) => {
            let name = default_name(0);
            let points = convert_points(&name, points)?;
            Ok(vec![Series::with_points(name, points)])
        }
    }
}

fn default_name(i: usize) -> String {
    format!("Series {}", i + 1)
}

fn convert_points(series: &str, raw: Vec<RawPoint>) -> Result<Vec<Point>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, rp)| -> Result<Point> {
            let (label, value) = match rp {
                RawPoint::Value(v) => (None, v),
                RawPoint::Pair(x, y) | RawPoint::Object { x, y } => (x.map(label_text), y),
            };
            let point = match value {
                None => Point::empty(),
                Some(v) => Point::new(numeric(v).map_err(|e| {
                    ChartError::invalid(format!("series '{series}' point {i}: {e}"))
                })?),
            };
            Ok(Point { label, ..point })
        })
        .collect()
}

fn label_text(x: RawScalar) -> String {
    match x {
        RawScalar::Num(n) => n.to_string(),
        RawScalar::Text(s) => s,
    }
}

fn numeric(v: RawScalar) -> std::result::Result<f64, String> {
    match v {
        RawScalar::Num(n) => Ok(n),
        RawScalar::Text(s) => s.trim().parse::<f64>().map_err(|_| format!("'{s}' is not a number")),
    }
}
