// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that prepares a simple line chart and prints its segments.

use chart_core::{Chart, ChartKind, Point, Series};

fn main() {
    // Build a simple line series with one gap
    let series = vec![Series::with_points(
        "temperature",
        vec![
            Point::labeled("06:00", 12.0),
            Point::labeled("09:00", 16.5),
            Point::labeled("12:00", 21.0),
            Point::empty().with_label("15:00"),
            Point::labeled("18:00", 17.2),
            Point::labeled("21:00", 14.0),
        ],
    )];

    let chart = Chart::new(ChartKind::Line);
    let prepared = match chart.prepare(&series) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("prepare failed: {e}");
            std::process::exit(1);
        }
    };

    println!("max = {}", prepared.maximum);
    for (segments, markers) in chart.lines(&prepared, None) {
        for s in segments {
            let style = if s.blank { "blank" } else { "solid" };
            println!(
                "segment {:>2}: from ({:>6.1}, {:>6.1}) len {:>6.2} angle {:>6.3} rad {:?} {style}",
                s.index, s.start_x, s.start_y, s.length, s.angle_rad, s.direction
            );
        }
        for m in markers {
            println!("point {:>2}: left {:>6.1} bottom {:>6.1} d {:.1}", m.index, m.left, m.bottom, m.diameter);
        }
    }
    for l in chart.x_labels(&prepared) {
        println!("x label '{}' at {:.1} (w {:.0})", l.text, l.left, l.width);
    }
}
