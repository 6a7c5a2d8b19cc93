// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for prepared chart output.
// Behavior:
// - Prepares a deterministic small chart and serializes it to pretty JSON.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the JSON values; numbers match within 1e-9 relative.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Chart, ChartKind, Point, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, got: &serde_json::Value) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        let text = serde_json::to_string_pretty(got).expect("serialize snapshot");
        std::fs::write(path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {}", path.display());
        return;
    }
    if path.exists() {
        let want: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).expect("read snapshot")).expect("parse snapshot");
        assert_json_close(got, &want, &path.display().to_string());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn assert_json_close(got: &serde_json::Value, want: &serde_json::Value, at: &str) {
    use serde_json::Value;
    match (got, want) {
        (Value::Number(a), Value::Number(b)) => {
            let (a, b) = (a.as_f64().expect("finite number"), b.as_f64().expect("finite number"));
            let tol = 1e-9 * a.abs().max(b.abs()).max(1.0);
            assert!((a - b).abs() <= tol, "{at}: got {a}, snapshot has {b}");
        }
        (Value::Array(a), Value::Array(b)) => {
            assert_eq!(a.len(), b.len(), "{at}: array length differs");
            for (i, (x, y)) in a.iter().zip(b).enumerate() {
                assert_json_close(x, y, &format!("{at}[{i}]"));
            }
        }
        (Value::Object(a), Value::Object(b)) => {
            let keys = |m: &serde_json::Map<String, Value>| m.keys().cloned().collect::<Vec<_>>();
            assert_eq!(keys(a), keys(b), "{at}: keys differ");
            for (k, x) in a {
                assert_json_close(x, &b[k], &format!("{at}.{k}"));
            }
        }
        _ => assert_eq!(got, want, "{at}: value differs from golden snapshot"),
    }
}

fn sample() -> Vec<Series> {
    vec![
        Series::with_points(
            "visits",
            vec![Point::labeled("Mon", 120.0), Point::labeled("Tue", 340.0), Point::empty(), Point::labeled("Thu", 90.0)],
        ),
        Series::from_values("signups", &[12.0, 40.0, 8.0, 15.0]),
    ]
}

#[test]
fn golden_column_chart() {
    let chart = Chart::new(ChartKind::Column);
    let prepared = chart.prepare(&sample()).expect("prepare");
    let got = serde_json::json!({
        "prepared": prepared,
        "columns": chart.columns(&prepared),
        "x_labels": chart.x_labels(&prepared),
        "y_labels": chart.y_labels(&prepared),
    });
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/column_chart.json");
    write_or_compare(&path, &got);
}

#[test]
fn golden_line_chart() {
    let chart = Chart::new(ChartKind::Line);
    let prepared = chart.prepare(&sample()).expect("prepare");
    let got = serde_json::json!({
        "prepared": prepared,
        "lines": chart.lines(&prepared, None),
    });
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/line_chart.json");
    write_or_compare(&path, &got);
}
