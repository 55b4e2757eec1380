//! PNG rendering of the per-finger ERPs.
//!
//! One line per finger over `[-pre_samples, +post_samples]`, with a dashed
//! marker at movement onset.
use anyhow::Result;
use ndarray::Array2;
use plotters::prelude::*;
use std::path::Path;

use crate::config::EpochConfig;
use crate::finger::Finger;

/// Line colours in row order: blue, orange, green, red, purple.
pub const FINGER_COLORS: [RGBColor; 5] = [
    RGBColor(0, 0, 255),
    RGBColor(255, 165, 0),
    RGBColor(0, 128, 0),
    RGBColor(255, 0, 0),
    RGBColor(128, 0, 128),
];

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Pixel size of the PNG.
    pub size: (u32, u32),
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Event Related Potentials (ERP) for Each Finger Movement".into(),
            x_label: "Time (ms)".into(),
            y_label: "Brain Signal Amplitude".into(),
            size: (1800, 1200),
        }
    }
}

/// Y range covering every value in `erp`, with 5 % headroom. A flat matrix
/// (e.g. all zero rows) gets `value ± 1`.
pub fn amplitude_range(erp: &Array2<f64>) -> (f64, f64) {
    let (lo, hi) = erp
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (-1.0, 1.0);
    }
    if hi - lo <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Alternating on/off vertical segments between `y0` and `y1`.
pub fn onset_dashes(y0: f64, y1: f64, n_dashes: usize) -> Vec<(f64, f64)> {
    let n_dashes = n_dashes.max(1);
    let step = (y1 - y0) / (2 * n_dashes - 1) as f64;
    (0..n_dashes)
        .map(|k| {
            let a = y0 + 2.0 * k as f64 * step;
            (a, a + step)
        })
        .collect()
}

/// Pixel offsets of the three dashes in the onset legend sample.
pub fn legend_dashes() -> [(i32, i32); 3] {
    let d = onset_dashes(0.0, 20.0, 3);
    [0, 1, 2].map(|k| (d[k].0.round() as i32, d[k].1.round() as i32))
}

/// Draw `erp` (shape `[5, cfg.epoch_len()]`) to `path` as a PNG.
pub fn plot_erp(erp: &Array2<f64>, cfg: &EpochConfig, opts: &PlotOptions, path: &Path) -> Result<()> {
    let t = cfg.time_axis();
    let x_min = -(cfg.pre_samples as f64);
    let x_max = cfg.post_samples as f64;
    let (y_min, y_max) = amplitude_range(erp);

    let root = BitMapBackend::new(path, opts.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&opts.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(opts.x_label.as_str())
        .y_desc(opts.y_label.as_str())
        .draw()?;

    for finger in Finger::ALL {
        let color = FINGER_COLORS[finger.row()];
        let row = erp.row(finger.row());
        chart
            .draw_series(LineSeries::new(
                t.iter().zip(row.iter()).map(|(&x, &y)| (x, y)),
                color.stroke_width(2),
            ))?
            .label(finger.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .draw_series(
            onset_dashes(y_min, y_max, 40)
                .into_iter()
                .map(|(a, b)| PathElement::new(vec![(0.0, a), (0.0, b)], BLACK.stroke_width(1))),
        )?
        .label("Movement onset")
        .legend(|(x, y)| {
            let [a, b, c] = legend_dashes();
            let dash = |(x0, x1): (i32, i32)| PathElement::new(vec![(x0, 0), (x1, 0)], BLACK.stroke_width(1));
            EmptyElement::at((x, y)) + dash(a) + dash(b) + dash(c)
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    tracing::info!(path = %path.display(), "wrote ERP plot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_matrix_gets_unit_range() {
        let erp = Array2::<f64>::zeros((5, 11));
        assert_eq!(amplitude_range(&erp), (-1.0, 1.0));
    }

    #[test]
    fn range_is_padded() {
        let mut erp = Array2::<f64>::zeros((5, 3));
        erp[[1, 2]] = 10.0;
        let (lo, hi) = amplitude_range(&erp);
        approx::assert_abs_diff_eq!(lo, -0.5, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(hi, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn colours_are_named_primaries() {
        assert_eq!(FINGER_COLORS[0], BLUE);
        assert_eq!(FINGER_COLORS[3], RED);
        assert_eq!(FINGER_COLORS[1], RGBColor(255, 165, 0));
    }

    #[test]
    fn onset_legend_is_dashed() {
        let d = legend_dashes();
        assert_eq!(d, [(0, 4), (8, 12), (16, 20)]);
    }

    #[test]
    fn dashes_cover_span() {
        let d = onset_dashes(0.0, 9.0, 5);
        assert_eq!(d.len(), 5);
        approx::assert_abs_diff_eq!(d[0].0, 0.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(d[4].1, 9.0, epsilon = 1e-12);
        assert!(d.windows(2).all(|w| w[0].1 < w[1].0));
    }
}
