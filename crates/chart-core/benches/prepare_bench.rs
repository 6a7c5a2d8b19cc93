use chart_core::{prepare, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_series(count: usize, n: usize) -> Vec<Series> {
    (0..count)
        .map(|s| {
            let values: Vec<f64> = (0..n)
                // simple waveform with per-series phase
                .map(|i| ((i as f64 * 0.01 + s as f64).sin() + 1.5) * 100.0)
                .collect();
            Series::from_values(format!("s{s}"), &values)
        })
        .collect()
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");
    for &n in &[1_000usize, 10_000usize] {
        for &count in &[1usize, 4usize] {
            let data = gen_series(count, n);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_s{count}")), &data, |b, d| {
                b.iter(|| { let _ = black_box(prepare(d, 240.0, 60.0, 5)); });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_prepare);
criterion_main!(benches);
