//! Drawing figures with `plotters`
//!
//! A figure is rendered onto an SVG canvas of [`PIXELS_PER_INCH`] pixels per inch.
//! Raster output rasterizes that SVG (see `raster`, behind the `png` feature).
//!
//! Panels split the canvas evenly, row-major, below the figure title.
use std::ops::Range;

use plotters::{
    chart::SeriesAnno,
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
};

use crate::{
    error::Result,
    figure::Figure,
    panel::{Axis, Panel},
    series::Series,
    style::{LegendLocation, LineStyle, Marker},
    value::pad_range,
};

mod palette;
use palette::ColorCycle;

#[cfg(feature = "png")]
pub(crate) mod raster;

/// Canvas resolution of the SVG rendering
pub const PIXELS_PER_INCH: f64 = 100.0;

/// Fraction of the data span added on each side of an automatic axis range
const AUTO_RANGE_PADDING: f64 = 0.05;

const LEGEND_SAMPLE_WIDTH: i32 = 20;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Converts a font size in points to canvas pixels
fn points_to_px(points: f64) -> f64 {
    points * PIXELS_PER_INCH / 72.0
}

fn font(points: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, points_to_px(points), FontStyle::Normal)
}

fn format_tick(v: &f64) -> String {
    if *v == 0.0 || (1e-3..1e3).contains(&v.abs()) {
        format!("{v:.2}")
    } else {
        format!("{v:.2e}")
    }
}

/// Renders the whole figure to an SVG document
pub(crate) fn render_svg(figure: &Figure) -> Result<String> {
    let (width, height) = figure.pixel_size();
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let body = if figure.title().is_empty() {
            root.clone()
        } else {
            root.titled(figure.title(), font(figure.title_font_size()))?
        };

        let shape = figure.shape();
        let areas = body.split_evenly((shape.rows(), shape.cols()));
        for (panel, area) in figure.panels().iter().zip(&areas) {
            draw_panel(panel, area)?;
        }

        root.present()?;
    }

    tracing::debug!(width, height, panels = figure.panels().len(), "rendered figure");
    Ok(buffer)
}

/// Range shown along an axis: the explicit limit, else the padded data extent
pub(crate) fn axis_range(panel: &Panel, axis: Axis) -> Range<f64> {
    if let Some(limit) = panel.limit(axis) {
        return limit.clone();
    }

    panel
        .data_bounds(axis)
        .map_or(0.0..1.0, |bounds| pad_range(&bounds, AUTO_RANGE_PADDING))
}

fn draw_panel(panel: &Panel, area: &Area<'_>) -> Result<()> {
    let tick_font = font(panel.tick_font_size());

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(axis_range(panel, Axis::X), axis_range(panel, Axis::Y))?;

    chart
        .configure_mesh()
        .label_style(tick_font.clone())
        .axis_desc_style(tick_font.clone())
        .x_desc(panel.label(Axis::X))
        .y_desc(panel.label(Axis::Y))
        .x_label_formatter(&format_tick)
        .y_label_formatter(&format_tick)
        .draw()?;

    let mut colors = ColorCycle::default();
    for series in panel.series() {
        let color = series
            .style()
            .color
            .map_or_else(|| colors.next_color(), RGBColor::from);
        draw_series(&mut chart, series, color)?;
    }

    for annotation in panel.annotations() {
        chart.draw_series(std::iter::once(Text::new(
            annotation.text.clone(),
            annotation.position,
            tick_font.clone().color(&BLACK),
        )))?;
    }

    if let Some(legend) = panel.legend() {
        if panel.series().iter().any(|s| s.label().is_some()) {
            chart
                .configure_series_labels()
                .label_font(font(legend.font_size))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(legend_position(legend.location))
                .draw()?;
        }
    }

    Ok(())
}

fn draw_series(chart: &mut Chart<'_, '_>, series: &Series, color: RGBColor) -> Result<()> {
    let style = series.style();
    let stroke = ShapeStyle::from(color).stroke_width(style.line_width);
    let fill = ShapeStyle::from(color).filled();
    let marker_size = i32::try_from(style.marker_size).unwrap_or(i32::MAX);

    // Points with a NaN coordinate are skipped
    let points: Vec<(f64, f64)> = series
        .points()
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .collect();

    // Only the first element drawn for a series carries its legend entry
    let mut pending_label = series.label();

    match style.line {
        LineStyle::Solid => {
            let anno = chart.draw_series(LineSeries::new(points.iter().copied(), stroke))?;
            attach_label(anno, &mut pending_label, stroke);
        }
        LineStyle::Dashed => {
            let anno = chart.draw_series(DashedLineSeries::new(points.iter().copied(), 6, 4, stroke))?;
            attach_label(anno, &mut pending_label, stroke);
        }
        LineStyle::None => {}
    }

    if let Some(marker) = style.marker {
        let anno = match marker {
            Marker::Circle => chart.draw_series(
                points.iter().map(|&p| Circle::new(p, marker_size, fill)),
            )?,
            Marker::Cross => chart.draw_series(
                points.iter().map(|&p| Cross::new(p, marker_size, stroke)),
            )?,
            Marker::Triangle => chart.draw_series(
                points.iter().map(|&p| TriangleMarker::new(p, marker_size, fill)),
            )?,
            Marker::Square => chart.draw_series(points.iter().map(|&p| {
                EmptyElement::at(p)
                    + Rectangle::new([(-marker_size, -marker_size), (marker_size, marker_size)], fill)
            }))?,
        };
        attach_label(anno, &mut pending_label, fill);
    }

    if let Some(errors) = series.y_errors() {
        let bars: Vec<_> = series
            .x()
            .iter()
            .zip(series.y())
            .zip(errors.spans(series.y()))
            .filter(|((x, y), _)| !x.is_nan() && !y.is_nan())
            .map(|((&x, &y), (min, max))| ErrorBar::new_vertical(x, min, y, max, stroke, style.cap_size))
            .collect();
        let anno = chart.draw_series(bars)?;
        attach_label(anno, &mut pending_label, stroke);
    }

    if let Some(errors) = series.x_errors() {
        let bars: Vec<_> = series
            .x()
            .iter()
            .zip(series.y())
            .zip(errors.spans(series.x()))
            .filter(|((x, y), _)| !x.is_nan() && !y.is_nan())
            .map(|((&x, &y), (min, max))| ErrorBar::new_horizontal(y, min, x, max, stroke, style.cap_size))
            .collect();
        let anno = chart.draw_series(bars)?;
        attach_label(anno, &mut pending_label, stroke);
    }

    Ok(())
}

fn attach_label(anno: &mut SeriesAnno<'_, SVGBackend<'_>>, label: &mut Option<&str>, sample: ShapeStyle) {
    if let Some(label) = label.take() {
        anno.label(label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + LEGEND_SAMPLE_WIDTH, y)], sample)
        });
    }
}

fn legend_position(location: LegendLocation) -> SeriesLabelPosition {
    match location {
        LegendLocation::Best | LegendLocation::UpperRight => SeriesLabelPosition::UpperRight,
        LegendLocation::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendLocation::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendLocation::LowerRight => SeriesLabelPosition::LowerRight,
        LegendLocation::UpperMiddle => SeriesLabelPosition::UpperMiddle,
        LegendLocation::LowerMiddle => SeriesLabelPosition::LowerMiddle,
        LegendLocation::MiddleLeft => SeriesLabelPosition::MiddleLeft,
        LegendLocation::MiddleRight => SeriesLabelPosition::MiddleRight,
        LegendLocation::Center => SeriesLabelPosition::MiddleMiddle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_tick_format() {
        assert_eq!(format_tick(&0.0), "0.00");
        assert_eq!(format_tick(&12.345), "12.35");
        assert_eq!(format_tick(&-2.5), "-2.50");
        assert_eq!(format_tick(&12345.0), "1.23e4");
    }

    #[test]
    fn test_axis_range() {
        let mut panel = Panel::new("X", "Y", 10.0);
        assert_eq!(axis_range(&panel, Axis::X), 0.0..1.0);

        panel.push_series(Series::new(vec![0.0, 10.0], vec![5.0, 5.0]).unwrap());
        let x = axis_range(&panel, Axis::X);
        assert_close!(x.start, -0.5);
        assert_close!(x.end, 10.5);
        assert_eq!(axis_range(&panel, Axis::Y), 4.5..5.5);

        assert!(panel.set_limit(Axis::X, 2.0..3.0).is_clean());
        assert_eq!(axis_range(&panel, Axis::X), 2.0..3.0);
    }

    #[test]
    fn test_font_points_to_pixels() {
        assert!((points_to_px(72.0) - PIXELS_PER_INCH).abs() < 1e-12);
    }
}
