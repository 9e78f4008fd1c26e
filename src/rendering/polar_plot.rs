// src/rendering/polar_plot.rs

use crate::config::PlotStyle;
use crate::error::{RamanError, Result};
use crate::physics::polarisation::IntensityCurve;
use super::IntensityVisualizer;
use std::path::PathBuf;

// Plotters imports
use plotters::coord::Shift;
use plotters::drawing::DrawingArea; // This is the Plotters canvas
use plotters::prelude::*;

const GRID_RINGS: usize = 4;
const SPOKE_STEP_DEG: usize = 45;
const LEGEND_ROW_PX: i32 = 20;
const LEGEND_WIDTH_PX: i32 = 90;
const CHART_MARGIN_PX: i32 = 20;
// Room right of the axes for a legend anchored at x = 1.1 on an 800 px wide plot
const LEGEND_MARGIN_PX: i32 = LEGEND_WIDTH_PX + 80;

/// Writes an overlaid polar plot of all curves to `output`
/// (`.svg` -> SVG, anything else -> bitmap by extension).
#[derive(Debug, Clone)]
pub struct PolarPlotter {
    pub output: PathBuf,
}

impl PolarPlotter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into() }
    }

    fn is_svg(&self) -> bool {
        self.output
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("svg"))
    }
}

impl IntensityVisualizer for PolarPlotter {
    fn render(&self, curves: &[IntensityCurve], style: &PlotStyle) -> Result<()> {
        let size = (style.width, style.height);

        let drawn = if self.is_svg() {
            let root = SVGBackend::new(&self.output, size).into_drawing_area();
            draw_polar_chart(&root, curves, style).and_then(|_| root.present().map_err(Into::into))
        } else {
            let root = BitMapBackend::new(&self.output, size).into_drawing_area();
            draw_polar_chart(&root, curves, style).and_then(|_| root.present().map_err(Into::into))
        };

        drawn.map_err(|e| RamanError::Render(e.to_string()))?;
        log::info!("Polar plot of {} curves written to {:?}", curves.len(), self.output);
        Ok(())
    }
}

// --- Helper Function: Draws the Chart to ANY Backend ---
fn draw_polar_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[IntensityCurve],
    style: &PlotStyle,
) -> std::result::Result<(), std::boxed::Box<dyn std::error::Error>>
where DB::ErrorType: 'static {

    root.fill(&WHITE)?;

    let r_max = radial_limit(curves);
    let lim = r_max * 1.15;

    let mut builder = ChartBuilder::on(root);
    builder.margin(CHART_MARGIN_PX).margin_right(LEGEND_MARGIN_PX);
    if let Some(title) = &style.title {
        builder.caption(title, ("sans-serif", 20));
    }
    let mut chart = builder.build_cartesian_2d(-lim..lim, -lim..lim)?;

    // 1. Polar grid (rings + spokes), drawn by hand on cartesian axes
    if style.show_grid {
        let grid_style = BLACK.mix(0.2).stroke_width(1);
        for ring in 1..=GRID_RINGS {
            let r = r_max * ring as f64 / GRID_RINGS as f64;
            chart.draw_series(LineSeries::new(circle(r, 180), grid_style))?;

            if style.show_radial_ticks {
                chart.draw_series(std::iter::once(Text::new(
                    format!("{:.3}", r),
                    (r * 0.05, r),
                    ("sans-serif", 11).into_font(),
                )))?;
            }
        }
        for deg in (0..360).step_by(SPOKE_STEP_DEG) {
            let (x, y) = to_cartesian((deg as f64).to_radians(), r_max);
            chart.draw_series(LineSeries::new(vec![(0.0, 0.0), (x, y)], grid_style))?;

            let (lx, ly) = to_cartesian((deg as f64).to_radians(), r_max * 1.08);
            chart.draw_series(std::iter::once(Text::new(
                format!("{}°", deg),
                (lx, ly),
                ("sans-serif", 12).into_font(),
            )))?;
        }
    }

    // 2. One closed line per curve
    for (i, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let mut points: Vec<(f64, f64)> = curve
            .samples
            .iter()
            .map(|&(theta, intensity)| to_cartesian(theta, intensity))
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }

        chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?;
    }

    // 3. Legend, on the root area so it may sit outside the axes
    if !curves.is_empty() {
        let (xs, ys) = chart.plotting_area().get_pixel_range();
        let axes = PixelRect {
            left: xs.start,
            top: ys.start,
            width: xs.end - xs.start,
            height: ys.end - ys.start,
        };
        let (w, h) = root.dim_in_pixel();
        let corner = legend_position(style.legend.anchor(), axes, (w, h), curves.len());
        draw_legend(root, curves, corner)?;
    }

    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[IntensityCurve],
    (x, y): (i32, i32),
) -> std::result::Result<(), std::boxed::Box<dyn std::error::Error>>
where DB::ErrorType: 'static {
    let corners = [(x, y), (x + LEGEND_WIDTH_PX, y + LEGEND_ROW_PX * curves.len() as i32)];
    root.draw(&Rectangle::new(corners, WHITE.mix(0.8).filled()))?;
    root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

    for (i, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let row_y = y + LEGEND_ROW_PX * i as i32 + LEGEND_ROW_PX / 2;
        root.draw(&PathElement::new(
            vec![(x + 5, row_y), (x + 25, row_y)],
            color.stroke_width(2),
        ))?;
        root.draw(&Text::new(
            curve.label.clone(),
            (x + 30, row_y - 6),
            ("sans-serif", 13).into_font(),
        ))?;
    }
    Ok(())
}

/// Pixel rectangle of the axes inside the root area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// (theta, r) -> (x, y)
pub fn to_cartesian(theta: f64, r: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

/// Largest intensity over all curves, 1.0 when everything is zero.
pub fn radial_limit(curves: &[IntensityCurve]) -> f64 {
    let max = curves.iter().map(|c| c.max_intensity()).fold(0.0, f64::max);
    if max > 1e-12 { max } else { 1.0 }
}

/// Root-area pixel position of the legend's top-left corner. The anchor is in
/// axes fractions (y up) and marks the middle of the box's left edge; anchors
/// beyond 1.0 land outside the axes. Only the root area bounds the result.
pub fn legend_position(anchor: (f64, f64), axes: PixelRect, root: (u32, u32), entries: usize) -> (i32, i32) {
    let (w, h) = (root.0 as i32, root.1 as i32);
    let box_h = LEGEND_ROW_PX * entries as i32;

    let x = axes.left + (anchor.0 * axes.width as f64).round() as i32;
    let y = axes.top + ((1.0 - anchor.1) * axes.height as f64).round() as i32 - box_h / 2;

    let max_x = (w - LEGEND_WIDTH_PX).max(0);
    let max_y = (h - box_h).max(0);
    (x.clamp(0, max_x), y.clamp(0, max_y))
}

fn circle(r: f64, segments: usize) -> Vec<(f64, f64)> {
    (0..=segments)
        .map(|i| to_cartesian(2.0 * std::f64::consts::PI * i as f64 / segments as f64, r))
        .collect()
}
