// File: crates/demo/src/main.rs
// Summary: Demo loads series from JSON/CSV, prepares column or line geometry, prints it and dumps JSON.

use anyhow::{Context, Result};
use chart_core::{Chart, ChartConfig, ChartKind, Point, PreparedChart, Series};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    init_tracing();

    // usage: pure-chart-demo [data.json|data.csv] [column|line] [config.json]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/data/sample.json".to_string());
    let kind = match args.next().as_deref() {
        None | Some("column") => ChartKind::Column,
        Some("line") => ChartKind::Line,
        Some(other) => anyhow::bail!("unknown chart kind '{other}' (expected column or line)"),
    };
    let config = match args.next() {
        Some(p) => load_config(Path::new(&p))?,
        None => ChartConfig::default(),
    };

    let path = resolve_path(&raw)?;
    tracing::info!(path = %path.display(), ?kind, "loading chart data");

    let series = load_series(&path).with_context(|| format!("failed to load '{}'", path.display()))?;
    println!("Loaded {} series x {} points", series.len(), series.first().map_or(0, |s| s.points.len()));

    let chart = Chart::with_config(kind, config);
    let prepared = chart
        .prepare(&series)
        .with_context(|| format!("failed to prepare '{}'", path.display()))?;

    if prepared.is_empty() {
        println!("No series; nothing to draw.");
        return Ok(());
    }

    print_summary(&chart, &prepared);

    let out = out_name_with(&path, kind);
    let dump = serde_json::json!({
        "kind": kind,
        "prepared": &prepared,
        "x_labels": chart.x_labels(&prepared),
        "y_labels": chart.y_labels(&prepared),
        "columns": matches!(kind, ChartKind::Column).then(|| chart.columns(&prepared)),
        "lines": matches!(kind, ChartKind::Line).then(|| chart.lines(&prepared, None)),
    });
    std::fs::write(&out, serde_json::to_string_pretty(&dump)?)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_summary(chart: &Chart, prepared: &PreparedChart) {
    println!("Maximum: {}", chart_core::format_number(prepared.maximum, true));

    println!("Guide lines:");
    for (g, label) in prepared.guide_lines.iter().zip(chart.y_labels(prepared)) {
        println!("  {:>10}  at {:>7.2}px  (ratio {:.4})", label.text, g.pixel_offset, g.scale_ratio);
    }

    for s in &prepared.series {
        println!("Series '{}' ({})", s.name, s.color_or(chart.config.primary_color));
        for (i, p) in s.points.iter().enumerate() {
            let label = p.label.as_deref().unwrap_or("-");
            if p.is_empty {
                println!("  [{i:>3}] {label:<12} (empty)   x={:>8.2}", p.horizontal_offset);
            } else {
                println!(
                    "  [{i:>3}] {label:<12} {:>10}  x={:>8.2} y={:>8.2}",
                    chart_core::format_number(p.value, true),
                    p.horizontal_offset,
                    p.vertical_offset
                );
            }
        }
    }

    // Show the tooltip the host would draw for the first selectable slot.
    if let Some(index) = (0..prepared.slot_count()).find(|&i| chart.tooltip(prepared, i).is_some()) {
        if let (Some(tip), Some(anchor)) = (chart.tooltip(prepared, index), chart.tooltip_anchor(prepared, index)) {
            println!("Tooltip for slot {index} at {anchor:?}:");
            for e in tip.entries {
                println!("  {} {} {}", e.color, e.title.as_deref().unwrap_or(""), e.value_text);
            }
        }
    }
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg = ChartConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(?cfg, "loaded config");
    Ok(cfg)
}

fn load_series(path: &Path) -> Result<Vec<Series>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "csv" => load_series_csv(path),
        _ => {
            let text = std::fs::read_to_string(path)?;
            Ok(chart_core::parse_series_json(&text)?)
        }
    }
}

/// CSV layout: first column holds the x labels, every further column is one series
/// named by its header. Blank or missing trailing cells become empty points.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    if headers.len() < 2 {
        anyhow::bail!("expected a label column and at least one series column, got {} columns", headers.len());
    }

    let mut series: Vec<Series> = headers[1..].iter().map(Series::new).collect();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(0).map(str::trim).filter(|s| !s.is_empty());
        for (col, s) in series.iter_mut().enumerate() {
            let cell = rec.get(col + 1).map(str::trim).unwrap_or("");
            let point = if cell.is_empty() {
                Point::empty()
            } else {
                let v = cell
                    .replace(',', "")
                    .parse::<f64>()
                    .with_context(|| format!("row {} column '{}': '{cell}' is not a number", row + 2, s.name))?;
                Point::new(v)
            };
            s.push(match label {
                Some(l) => point.with_label(l),
                None => point,
            });
        }
    }
    Ok(series)
}

/// Resolve path, trying a `.json` / `.csv` sibling if the given file is missing.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    for ext in ["json", "csv"] {
        let alt = p.with_extension(ext);
        if alt.exists() {
            tracing::warn!(requested = %p.display(), using = %alt.display(), "input not found; using sibling");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/chart_<stem>_<kind>.json
fn out_name_with(input: &Path, kind: ChartKind) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let suffix = match kind {
        ChartKind::Column => "column",
        ChartKind::Line => "line",
    };
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{stem}_{suffix}.json"));
    out
}
