// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports data preparation and chart geometry API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod input;
pub mod prepare;
pub mod scale;
pub mod selection;

pub use chart::{Chart, ChartKind, TooltipAnchor};
pub use series::{Color, Point, PreparedPoint, PreparedSeries, Series};
pub use config::{ChartConfig, SeriesOrder, TooltipLayout};
pub use error::{ChartError, Result};
pub use format::{format_compact, format_number};
pub use input::parse_series_json;
pub use prepare::{guide_lines, prepare, prepare_with, GuideLine, PrepareOptions, PreparedChart};
