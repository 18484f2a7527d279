//! Constellation diagram with Gray-check edges.
//!
//! Points are drawn in blue with their bit label beside them. Each
//! nearest-neighbor edge is green when it is a single-bit transition and red
//! otherwise. Both axes share one scale.

use std::path::Path;

use graycheck_core::{Constellation, GrayReport, Point, Transition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::Result;

pub const CONSTELLATION_TITLE: &str = "Constellation with Gray Code Check";

const TITLE_HEIGHT: u32 = 40;
const MARGIN: u32 = 20;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 50;
// Takes up the width the title band and x labels take from the height, so the
// plotting rectangle stays square on a square image.
const RIGHT_MARGIN: u32 = MARGIN + TITLE_HEIGHT + X_LABEL_AREA - Y_LABEL_AREA;

type SquareChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Layout of the constellation diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationStyle {
    /// Image side in pixels; the image is square
    pub size: u32,
    /// Label offset from its point, in plot units on both axes
    pub label_offset: f64,
    pub point_radius: u32,
    pub font_size: f64,
}

impl Default for ConstellationStyle {
    fn default() -> Self {
        Self {
            size: 800,
            label_offset: 0.1,
            point_radius: 4,
            font_size: 12.0,
        }
    }
}

/// Square plot window around a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Smallest square containing every point plus a margin of 10% of the
    /// span (at least `min_margin`). Falls back to `[-1, 1]²` for no points.
    pub fn square_around<'a, I>(points: I, min_margin: f64) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            x = (x.0.min(p.x), x.1.max(p.x));
            y = (y.0.min(p.y), y.1.max(p.y));
        }
        if !x.0.is_finite() {
            return Self {
                x_min: -1.0,
                x_max: 1.0,
                y_min: -1.0,
                y_max: 1.0,
            };
        }

        let span = (x.1 - x.0).max(y.1 - y.0);
        let half = span / 2.0 + (span * 0.1).max(min_margin);
        let (cx, cy) = ((x.0 + x.1) / 2.0, (y.0 + y.1) / 2.0);
        Self {
            x_min: cx - half,
            x_max: cx + half,
            y_min: cy - half,
            y_max: cy + half,
        }
    }
}

/// Colour of an edge by verdict.
pub fn edge_color(transition: Transition) -> RGBAColor {
    match transition {
        Transition::Valid => GREEN.mix(0.7),
        Transition::Invalid => RED.mix(0.7),
    }
}

/// Draw the title band and return the area below it.
fn titled<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<DrawingArea<DB, Shift>> {
    let (title, body) = root.split_vertically(TITLE_HEIGHT);
    title.titled(CONSTELLATION_TITLE, ("sans-serif", 20))?;
    Ok(body)
}

fn square_chart<'a, DB: DrawingBackend>(
    body: &'a DrawingArea<DB, Shift>,
    bounds: &Bounds,
) -> Result<SquareChart<'a, DB>> {
    let chart = ChartBuilder::on(body)
        .margin(MARGIN)
        .margin_right(RIGHT_MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)?;
    Ok(chart)
}

/// Draw onto an existing drawing area.
///
/// The area should be square for the two axes to share one pixel scale.
pub fn draw_constellation<DB>(
    root: &DrawingArea<DB, Shift>,
    constellation: &Constellation,
    report: &GrayReport,
    style: &ConstellationStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let positions: Vec<Point> = constellation.iter().map(|s| s.position()).collect();
    let bounds = Bounds::square_around(&positions, 2.0 * style.label_offset);

    root.fill(&WHITE)?;
    let body = titled(root)?;
    let mut chart = square_chart(&body, &bounds)?;

    chart
        .configure_mesh()
        .x_desc("I")
        .y_desc("Q")
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()?;

    chart.draw_series(report.edges.iter().filter_map(|e| {
        let a = constellation.get(e.edge.a())?.position();
        let b = constellation.get(e.edge.b())?.position();
        Some(PathElement::new(
            vec![(a.x, a.y), (b.x, b.y)],
            edge_color(e.transition).stroke_width(2),
        ))
    }))?;

    chart.draw_series(
        positions
            .iter()
            .map(|p| Circle::new((p.x, p.y), style.point_radius, BLUE.filled())),
    )?;

    let font = ("sans-serif", style.font_size).into_font();
    chart.draw_series(constellation.iter().map(|s| {
        let p = s.position();
        Text::new(
            s.label().to_string(),
            (p.x + style.label_offset, p.y + style.label_offset),
            font.clone(),
        )
    }))?;

    Ok(())
}

/// Render to an SVG document in memory.
pub fn constellation_svg(
    constellation: &Constellation,
    report: &GrayReport,
    style: &ConstellationStyle,
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.size, style.size)).into_drawing_area();
        draw_constellation(&root, constellation, report, style)?;
        root.present()?;
    }
    Ok(svg)
}

/// Render to an SVG file.
pub fn render_constellation(
    path: &Path,
    constellation: &Constellation,
    report: &GrayReport,
    style: &ConstellationStyle,
) -> Result<()> {
    let root = SVGBackend::new(path, (style.size, style.size)).into_drawing_area();
    draw_constellation(&root, constellation, report, style)?;
    root.present()?;
    debug!(path = %path.display(), edges = report.edges.len(), "wrote constellation diagram");
    Ok(())
}
