//! Histogram rendering for diagnostic plots
//!
//! Renders two value populations as overlaid semi-transparent histograms into
//! a PNG. Binning is computed over the combined range of both series so the
//! populations stay directly comparable.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::constants::HISTOGRAM_BINS;
use crate::{Error, Result};

const PLOT_SIZE: (u32, u32) = (1024, 768);

/// Per-bin counts for one series over a fixed range
fn bin_counts(values: &[f64], min: f64, width: f64) -> Vec<usize> {
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for &value in values {
        let bin = ((value - min) / width) as usize;
        counts[bin.min(HISTOGRAM_BINS - 1)] += 1;
    }
    counts
}

/// Render two overlaid histograms to `destination`
///
/// An empty pair of series is skipped rather than rendered; a single empty
/// series simply contributes no bars.
pub fn render_histogram(
    series_a: &[f64],
    series_b: &[f64],
    destination: &Path,
    label_a: &str,
    label_b: &str,
) -> Result<()> {
    let finite: Vec<f64> = series_a
        .iter()
        .chain(series_b.iter())
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    if finite.is_empty() {
        debug!("No finite values to plot; skipping {}", destination.display());
        return Ok(());
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // degenerate single-value ranges still get a visible bar
    let span = if max > min { max - min } else { 1.0 };
    let width = span / HISTOGRAM_BINS as f64;

    let counts_a = bin_counts(series_a, min, width);
    let counts_b = bin_counts(series_b, min, width);
    let peak = counts_a
        .iter()
        .chain(counts_b.iter())
        .copied()
        .max()
        .unwrap_or(1)
        .max(1);

    let root = BitMapBackend::new(destination, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::plotting(format!("failed to clear canvas: {e}")))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(
            format!("{label_a} vs {label_b}"),
            ("sans-serif", 24).into_font(),
        )
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min..min + span, 0usize..peak + peak / 10 + 1)
        .map_err(|e| Error::plotting(format!("failed to build chart: {e}")))?;

    chart
        .configure_mesh()
        .y_desc("Count")
        .draw()
        .map_err(|e| Error::plotting(format!("failed to draw mesh: {e}")))?;

    for (counts, label, color) in [
        (&counts_a, label_a, BLUE.mix(0.45)),
        (&counts_b, label_b, RED.mix(0.45)),
    ] {
        let color = color.clone();
        let legend_color = color.clone();
        chart
            .draw_series(counts.iter().enumerate().filter(|&(_, &c)| c > 0).map(
                |(bin, &count)| {
                    let x0 = min + bin as f64 * width;
                    Rectangle::new([(x0, 0), (x0 + width, count)], color.clone().filled())
                },
            ))
            .map_err(|e| Error::plotting(format!("failed to draw series: {e}")))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], legend_color.clone().filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| Error::plotting(format!("failed to draw legend: {e}")))?;

    root.present()
        .map_err(|e| Error::plotting(format!("failed to write {}: {e}", destination.display())))?;
    debug!("Rendered histogram to {}", destination.display());

    Ok(())
}
