// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/guide layout helpers.

/// Evenly spaced fractions `k / steps` for `k in 0..steps` (end excluded).
pub fn guide_fractions(steps: usize) -> impl Iterator<Item = f64> {
    let n = steps as f64;
    (0..steps).map(move |k| k as f64 / n)
}
