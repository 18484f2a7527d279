//! BER-vs-SNR curves on a logarithmic BER axis.

use std::ops::Range;
use std::path::Path;

use graycheck_io::BerCurve;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, warn};

use crate::{Error, Result};

pub const BER_TITLE: &str = "BER vs SNR";
pub const LEGEND_TITLE: &str = "Configuration";

/// Layout of the BER plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BerStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for BerStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// Points of `curve` that can be placed on a log axis.
///
/// Zero or negative BER and non-finite values are dropped.
pub fn plottable_points(curve: &BerCurve) -> Vec<(f64, f64)> {
    curve
        .points
        .iter()
        .filter(|p| p.snr_db.is_finite() && p.ber.is_finite() && p.ber > 0.0)
        .map(|p| (p.snr_db, p.ber))
        .collect()
}

/// SNR range and decade-aligned BER range covering every point.
///
/// `None` when no point is plottable.
pub fn plot_ranges(series: &[Vec<(f64, f64)>]) -> Option<(Range<f64>, Range<f64>)> {
    let mut snr = (f64::INFINITY, f64::NEG_INFINITY);
    let mut ber = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in series.iter().flatten() {
        snr = (snr.0.min(x), snr.1.max(x));
        ber = (ber.0.min(y), ber.1.max(y));
    }
    if !snr.0.is_finite() {
        return None;
    }
    if snr.0 == snr.1 {
        snr = (snr.0 - 1.0, snr.1 + 1.0);
    }

    let mut lo = ber.0.log10().floor();
    let mut hi = ber.1.log10().ceil();
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }
    Some((snr.0..snr.1, 10f64.powf(lo)..10f64.powf(hi)))
}

/// Draw every curve onto an existing drawing area.
pub fn draw_ber<DB>(root: &DrawingArea<DB, Shift>, curves: &[BerCurve]) -> Result<()>
where
    DB: DrawingBackend,
{
    let series: Vec<Vec<(f64, f64)>> = curves
        .iter()
        .map(|curve| {
            let points = plottable_points(curve);
            let skipped = curve.points.len() - points.len();
            if skipped > 0 {
                warn!(config = %curve.name, skipped, "dropped points that cannot be shown on a log scale");
            }
            points
        })
        .collect();
    let (snr_range, ber_range) =
        plot_ranges(&series).ok_or_else(|| Error::NoData("no positive BER values".into()))?;

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(BER_TITLE, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(snr_range, ber_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc("SNR, dB")
        .y_desc("BER")
        .y_label_formatter(&|v| format!("{v:.0e}"))
        .draw()?;

    // A label with no marker heads the legend.
    chart
        .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
        .label(LEGEND_TITLE);

    for (i, (curve, points)) in curves.iter().zip(&series).enumerate() {
        if points.is_empty() {
            continue;
        }
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(curve.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Render to an SVG document in memory.
pub fn ber_svg(curves: &[BerCurve], style: &BerStyle) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_ber(&root, curves)?;
        root.present()?;
    }
    Ok(svg)
}

/// Render to an SVG file.
pub fn render_ber(path: &Path, curves: &[BerCurve], style: &BerStyle) -> Result<()> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_ber(&root, curves)?;
    root.present()?;
    debug!(path = %path.display(), curves = curves.len(), "wrote BER plot");
    Ok(())
}
