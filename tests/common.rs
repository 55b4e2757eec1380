//! Shared helpers for building recordings and event tables.
use fingers_erp::Event;
use ndarray::Array1;
use std::io::Write;
use std::path::PathBuf;

#[allow(unused)]
/// `[0, 1, 2, …, n - 1]`: every sample equals its index.
pub fn ramp(n: usize) -> Array1<f64> {
    (0..n).map(|i| i as f64).collect()
}

#[allow(unused)]
/// Deterministic non-trivial signal (sum of two sines plus a drift).
pub fn wavy(n: usize) -> Array1<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            (t * 0.011).sin() * 25.0 + (t * 0.17).cos() * 3.0 + t * 1e-3
        })
        .collect()
}

#[allow(unused)]
/// Events from `(starting_point, finger)` pairs; `peak_point` = onset + 100.
pub fn events(pairs: &[(i64, i64)]) -> Vec<Event> {
    pairs.iter().map(|&(s, f)| Event::new(s, s + 100, f)).collect()
}

#[allow(unused)]
/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path)
        .unwrap_or_else(|_| panic!("cannot create {}", path.display()));
    f.write_all(contents.as_bytes()).unwrap();
    path
}
