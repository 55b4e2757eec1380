use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use fingers_erp::{mean_erp, EpochConfig, Event};
use ndarray::Array1;

/// 10 minutes at 1 kHz with one movement every 1.5 s, fingers cycling 1..=5.
fn synthetic() -> (Vec<Event>, Array1<f64>) {
    let n = 600_000;
    let signal: Array1<f64> = (0..n).map(|i| (i as f64 * 0.013).sin() * 40.0).collect();
    let events = (0..400)
        .map(|k| {
            let onset = 300 + k * 1500;
            Event::new(onset, onset + 120, (k % 5) + 1)
        })
        .collect();
    (events, signal)
}

fn bench_mean_erp(c: &mut Criterion) {
    let (events, signal) = synthetic();
    let cfg = EpochConfig::default();
    c.bench_function("mean_erp [400 events, 600k samples]", |b| {
        b.iter(|| {
            let erp = mean_erp(black_box(&events), black_box(&signal), &cfg);
            black_box(erp[[0, 0]])
        })
    });
}

criterion_group!(benches, bench_mean_erp);
criterion_main!(benches);
