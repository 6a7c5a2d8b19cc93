// File: crates/chart-examples/src/bin/columns.rs
// Summary: Minimal example that prepares a two-series column chart and prints the bars.

use chart_core::{Chart, ChartKind, Color, Series};

fn main() {
    let series = vec![
        Series::from_values("2023", &[420.0, 380.0, 510.0, 605.0]),
        Series::from_values("2024", &[460.0, 455.0, 590.0, 720.0]).with_color(Color::from_rgb(0xe0, 0x7a, 0x5f)),
    ];

    let chart = Chart::new(ChartKind::Column);
    let prepared = match chart.prepare(&series) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("prepare failed: {e}");
            std::process::exit(1);
        }
    };

    for label in chart.y_labels(&prepared) {
        println!("guide {:>6} at {:>6.1}px", label.text, label.pixel_offset);
    }
    for (slot, rects) in chart.columns(&prepared).iter().enumerate() {
        for (r, s) in rects.iter().zip(&prepared.series) {
            println!("slot {slot} {:<5} left {:>6.1} w {:>5.1} h {:>6.1}", s.name, r.left, r.width, r.height);
        }
    }
    if let Some(tip) = chart.tooltip(&prepared, 3) {
        for e in tip.entries {
            println!("tooltip {} = {}", e.series, e.value_text);
        }
    }
}
