// File: crates/chart-core/tests/prepare.rs
// Purpose: Data preparation scenarios and invariants (maximum, offsets, guide lines, errors).

use chart_core::{prepare, prepare_with, ChartError, Point, PrepareOptions, Series, SeriesOrder};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn single_series_scenario() {
    let series = vec![Series::from_values("a", &[10.0, 20.0, 5.0])];
    let out = prepare(&series, 100.0, 40.0, 2).expect("prepare");

    assert_eq!(out.maximum, 20.0);
    let v: Vec<f64> = out.series[0].points.iter().map(|p| p.vertical_offset).collect();
    assert_eq!(v, vec![50.0, 100.0, 25.0]);

    assert_eq!(out.guide_lines.len(), 2);
    assert_eq!(out.guide_lines[0].value, 0.0);
    assert_eq!(out.guide_lines[0].pixel_offset, 0.0);
    assert_eq!(out.guide_lines[0].scale_ratio, 0.0);
    assert_eq!(out.guide_lines[1].value, 10.0);
    assert_eq!(out.guide_lines[1].pixel_offset, 50.0);
    assert_eq!(out.guide_lines[1].scale_ratio, 5.0);
}

#[test]
fn empty_list_is_not_an_error() {
    let out = prepare(&[], 100.0, 40.0, 5).expect("empty input is valid");
    assert!(out.series.is_empty());
    assert_eq!(out.maximum, 0.0);
    assert!(out.guide_lines.is_empty());

    // absence wins over layout validation
    assert!(prepare(&[], -1.0, 0.0, 5).is_ok());
}

#[test]
fn mismatched_point_counts_fail() {
    let series = vec![
        Series::from_values("a", &[1.0, 2.0, 3.0]),
        Series::from_values("b", &[1.0, 2.0]),
    ];
    let err = prepare(&series, 100.0, 40.0, 2).unwrap_err();
    let ChartError::InvalidInput(msg) = err;
    assert!(msg.contains("series 1"), "message should name the series: {msg}");
}

#[test]
fn non_positive_layout_fails() {
    let series = vec![Series::from_values("a", &[1.0])];
    assert!(matches!(prepare(&series, 0.0, 40.0, 2), Err(ChartError::InvalidInput(_))));
    assert!(matches!(prepare(&series, 100.0, -3.0, 2), Err(ChartError::InvalidInput(_))));
    assert!(matches!(prepare(&series, f64::NAN, 40.0, 2), Err(ChartError::InvalidInput(_))));
}

#[test]
fn non_finite_value_fails() {
    let series = vec![Series::from_values("a", &[1.0, f64::INFINITY])];
    assert!(prepare(&series, 100.0, 40.0, 2).is_err());
}

#[test]
fn all_empty_points_degenerate_to_zero() {
    let series = vec![
        Series::with_points("a", vec![Point::empty(), Point::empty()]),
        Series::with_points("b", vec![Point::empty(), Point::empty()]),
    ];
    let out = prepare(&series, 100.0, 40.0, 3).expect("prepare");
    assert_eq!(out.maximum, 0.0);
    assert!(out.series.iter().flat_map(|s| &s.points).all(|p| p.vertical_offset == 0.0));
    assert_eq!(out.guide_lines.len(), 3);
    assert!(out.guide_lines.iter().all(|g| g.value == 0.0 && g.scale_ratio == 0.0));

    let no_points = vec![Series::new("a"), Series::new("b")];
    let out = prepare(&no_points, 100.0, 40.0, 0).expect("prepare");
    assert_eq!(out.maximum, 0.0);
    assert_eq!(out.slot_count(), 0);
}

#[test]
fn empty_points_are_skipped_for_maximum_but_keep_slots() {
    let series = vec![Series::with_points(
        "a",
        vec![Point::new(4.0), Point { label: None, value: 1000.0, is_empty: true }, Point::new(8.0)],
    )];
    let out = prepare(&series, 80.0, 10.0, 4).expect("prepare");
    assert_eq!(out.maximum, 8.0);
    let pts = &out.series[0].points;
    assert_eq!(pts.len(), 3);
    assert_eq!(pts[1].horizontal_offset, 10.0);
    assert_eq!(pts[1].vertical_offset, 0.0);
    assert_eq!(pts[2].vertical_offset, 80.0);
}

#[test]
fn maximum_spans_all_series() {
    let series = vec![
        Series::from_values("a", &[1.0, 2.0]),
        Series::from_values("b", &[40.0, 10.0]),
    ];
    let out = prepare(&series, 200.0, 30.0, 4).expect("prepare");
    assert_eq!(out.maximum, 40.0);
    assert_eq!(out.series[0].points[1].vertical_offset, 10.0);
    assert_eq!(out.series[1].points[0].vertical_offset, 200.0);
}

#[test]
fn horizontal_offsets_step_by_gap() {
    let values: Vec<f64> = (0..25).map(|i| (i * 7 % 11) as f64).collect();
    let series = vec![Series::from_values("a", &values)];
    let opts = PrepareOptions::new(120.0, 33.5, 5).with_leading_margin(12.0);
    let out = prepare_with(&series, &opts).expect("prepare");
    let pts = &out.series[0].points;
    assert_eq!(pts[0].horizontal_offset, 12.0);
    for w in pts.windows(2) {
        assert!(approx(w[1].horizontal_offset - w[0].horizontal_offset, 33.5));
    }
}

#[test]
fn vertical_offsets_stay_within_height() {
    let series = vec![
        Series::from_values("a", &[-5.0, 0.0, 3.3, 9.9, 12.0]),
        Series::from_values("b", &[7.0, 1.0, 0.5, 11.0, 2.0]),
    ];
    let out = prepare(&series, 150.0, 20.0, 5).expect("prepare");
    for p in out.series.iter().flat_map(|s| &s.points) {
        assert!(p.vertical_offset >= 0.0 && p.vertical_offset <= 150.0, "{p:?}");
    }
}

#[test]
fn guide_lines_are_evenly_spaced() {
    let series = vec![Series::from_values("a", &[0.0, 250.0, 125.0])];
    let out = prepare(&series, 100.0, 20.0, 5).expect("prepare");
    let expected = [0.0, 50.0, 100.0, 150.0, 200.0];
    assert_eq!(out.guide_lines.len(), expected.len());
    for (g, want) in out.guide_lines.iter().zip(expected) {
        assert!(approx(g.value, want), "{g:?} vs {want}");
        assert!(approx(g.pixel_offset, want / 2.5));
    }
    for g in &out.guide_lines[1..] {
        assert!(approx(g.scale_ratio, 100.0 / 250.0));
    }
    assert!(prepare(&series, 100.0, 20.0, 0).expect("prepare").guide_lines.is_empty());
}

#[test]
fn prepare_is_deterministic() {
    let series = vec![
        Series::from_values("a", &[3.0, 1.0, 4.0, 1.0, 5.0]),
        Series::from_values("b", &[9.0, 2.0, 6.0, 5.0, 3.0]),
    ];
    let a = prepare(&series, 97.0, 13.0, 7).expect("prepare");
    let b = prepare(&series, 97.0, 13.0, 7).expect("prepare");
    assert_eq!(a, b);
}

#[test]
fn series_order_is_applied_only_when_configured() {
    let series = vec![
        Series::from_values("zeta", &[1.0, 2.0]),
        Series::from_values("alpha", &[5.0, 1.0]),
        Series::from_values("mid", &[3.0, 3.0]),
    ];
    let names = |order| {
        let opts = PrepareOptions::new(100.0, 10.0, 2).with_order(order);
        prepare_with(&series, &opts)
            .expect("prepare")
            .series
            .into_iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(SeriesOrder::Input), ["zeta", "alpha", "mid"]);
    assert_eq!(names(SeriesOrder::NameAscending), ["alpha", "mid", "zeta"]);
    assert_eq!(names(SeriesOrder::PeakDescending), ["alpha", "mid", "zeta"]);
}
