use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{LivePlotError, Result};
use crate::figure::{Axes, Figure};
use crate::style::{Rgb, ThemeColors};

const TICK_FONT_SIZE: f64 = 10.0;

fn render_err<E: std::fmt::Display>(e: E) -> LivePlotError {
    LivePlotError::Render(e.to_string())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Largest magnitude an axis bound may take; keeps the padded span finite.
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Pad a y range by 5% so lines don't sit on the frame; flat or empty data
/// gets a usable range around it.
///
/// Bounds are clamped to `±AXIS_LIMIT` first, so the result is always finite
/// and `lo < hi` even for samples near `f64::MAX`.
pub(crate) fn padded_range(extent: Option<(f64, f64)>) -> (f64, f64) {
    let Some((lo, hi)) = extent else {
        return (0.0, 1.0);
    };
    let lo = lo.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let hi = hi.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let half_span = (hi - lo) / 2.0;
    let magnitude = lo.abs().max(hi.abs());
    if half_span <= f64::EPSILON || half_span <= magnitude * 1e-9 {
        let pad = if magnitude > f64::EPSILON { magnitude * 0.05 } else { 0.5 };
        (lo - pad, hi + pad)
    } else {
        let pad = half_span * 0.1;
        (lo - pad, hi + pad)
    }
}

/// Draw the whole figure into an SVG document.
pub fn figure_to_svg(figure: &Figure) -> Result<String> {
    let size = figure.size();
    let layout = figure.layout();
    let colors = figure.theme().colors();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (size.width, size.height)).into_drawing_area();
        root.fill(&rgb(colors.figure_background)).map_err(render_err)?;
        let cells = root.split_evenly((layout.rows, layout.cols));
        for axes in figure.axes() {
            let (row, col) = axes.cell();
            if let Some(area) = cells.get(row * layout.cols + col) {
                draw_axes(area, axes, &colors)?;
            }
        }
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

fn draw_axes<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    axes: &Axes,
    colors: &ThemeColors,
) -> Result<()> {
    let text = rgb(colors.text);

    let mut builder = ChartBuilder::on(area);
    builder.margin(10).x_label_area_size(40).y_label_area_size(50);
    if let Some(title) = axes.title() {
        let weight = if title.font.bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        builder.caption(
            &title.text,
            FontDesc::new(FontFamily::SansSerif, title.font.size, weight).color(&text),
        );
    }

    let x_max = axes.x_len().saturating_sub(1).max(1) as f64;
    let (y_lo, y_hi) = padded_range(axes.y_extent());
    let mut chart = builder
        .build_cartesian_2d(0f64..x_max, y_lo..y_hi)
        .map_err(render_err)?;

    chart
        .plotting_area()
        .fill(&rgb(colors.axes_background))
        .map_err(render_err)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.label_style(FontDesc::new(FontFamily::SansSerif, TICK_FONT_SIZE, FontStyle::Normal).color(&text))
            .axis_style(text.mix(0.6));
        if let Some(label) = axes.x_label() {
            mesh.x_desc(label.text.clone()).axis_desc_style(
                FontDesc::new(FontFamily::SansSerif, label.size, FontStyle::Normal).color(&text),
            );
        }
        match colors.grid {
            Some(grid) => {
                mesh.bold_line_style(rgb(grid)).light_line_style(TRANSPARENT);
            }
            None => {
                mesh.disable_mesh();
            }
        }
        mesh.draw().map_err(render_err)?;
    }

    for line in axes.lines() {
        let color = rgb(line.color);
        if let (Some(s), true) = (&line.smoothed, line.band) {
            let mut band: Vec<(f64, f64)> = s
                .upper
                .iter()
                .enumerate()
                .map(|(i, y)| (i as f64, *y))
                .collect();
            band.extend(s.lower.iter().enumerate().rev().map(|(i, y)| (i as f64, *y)));
            band.retain(|(_, y)| y.is_finite());
            if band.len() > 2 {
                chart
                    .draw_series(std::iter::once(Polygon::new(band, color.mix(0.2).filled())))
                    .map_err(render_err)?;
            }
        }
        let points: Vec<(f64, f64)> = line
            .line_values()
            .iter()
            .enumerate()
            .filter(|(_, y)| y.is_finite())
            .map(|(i, y)| (i as f64, *y))
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(render_err)?;
    }
    Ok(())
}
