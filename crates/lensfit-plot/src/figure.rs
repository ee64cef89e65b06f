use log::debug;

use crate::axes_draw::draw_axes;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::PlotConfig;
use crate::layout::annotation::draw_annotation;
use crate::layout::area::PlotArea;
use crate::layout::axes::Axis;
use crate::layout::legend::{draw_legend, LegendEntry, LegendKind};
use crate::primitives::*;
use crate::PlotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Markers only.
    Scatter,
    /// Solid polyline through the points in order.
    Line,
    /// Dashed polyline through the points in order.
    DashedLine,
}

#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub color: Color,
    /// Marker edge colour, scatter series only.
    pub edge: Option<Color>,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(kind: SeriesKind, label: impl Into<String>, color: Color, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            kind,
            color,
            edge: None,
            points,
        }
    }

    pub fn with_edge(mut self, edge: Color) -> Self {
        self.edge = Some(edge);
        self
    }
}

/// A single 2-D figure: series drawn in order (later on top), a legend of
/// all labelled series, and an optional annotation block.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub annotation: Vec<String>,
}

/// Render a figure to an SVG string.
///
/// # Errors
///
/// - [`PlotError::NoData`] if no series has points
/// - [`PlotError::NonFinite`] if any point is NaN or infinite
pub fn render_figure(figure: &Figure, config: &PlotConfig) -> crate::Result<String> {
    let (x_range, y_range) = data_bounds(figure)?;

    let mut canvas = Canvas::new(config.figure.width, config.figure.height);
    let x_axis = Axis::auto_linear(x_range.0, x_range.1, 8).with_label(&figure.x_label);
    let y_axis = Axis::auto_linear(y_range.0, y_range.1, 7).with_label(&figure.y_label);
    let area = PlotArea::auto(&canvas, &x_axis, &y_axis, !figure.title.is_empty(), config);
    debug!(
        "figure '{}': x [{}, {}], y [{}, {}]",
        figure.title, x_axis.min, x_axis.max, y_axis.min, y_axis.max
    );

    if !figure.title.is_empty() {
        let title_style = TextStyle {
            size: config.font.title_size,
            anchor: TextAnchor::Middle,
            ..Default::default()
        };
        canvas.text(
            area.left + area.width / 2.0,
            area.top - 10.0,
            &figure.title,
            &title_style,
        );
    }

    draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    let to_px = |&(x, y): &(f64, f64)| {
        (
            x_axis.data_to_pixel(x, area.left, area.right()),
            y_axis.data_to_pixel(y, area.bottom(), area.top),
        )
    };

    canvas.push_clip(area.left, area.top, area.width, area.height);
    for series in &figure.series {
        let px: Vec<(f64, f64)> = series.points.iter().map(to_px).collect();
        match series.kind {
            SeriesKind::Scatter => {
                let marker = MarkerStyle {
                    radius: config.marker_radius,
                    fill: series.color,
                    edge: series.edge,
                };
                for (x, y) in px {
                    canvas.marker(x, y, &marker);
                }
            }
            SeriesKind::Line => {
                canvas.polyline(&px, &LineStyle::solid(series.color, config.line_width));
            }
            SeriesKind::DashedLine => {
                canvas.polyline(&px, &LineStyle::dashed(series.color, config.line_width));
            }
        }
    }
    canvas.pop_clip();

    let entries: Vec<LegendEntry> = figure
        .series
        .iter()
        .filter(|s| !s.label.is_empty())
        .map(|s| LegendEntry {
            label: s.label.clone(),
            color: s.color,
            kind: match s.kind {
                SeriesKind::Scatter => LegendKind::Marker(s.edge),
                SeriesKind::Line => LegendKind::Line,
                SeriesKind::DashedLine => LegendKind::DashedLine,
            },
        })
        .collect();
    draw_legend(&mut canvas, &area, &entries, config.font.legend_size);

    draw_annotation(
        &mut canvas,
        &area,
        &figure.annotation,
        config.font.annotation_size,
        config.annotation_inset,
    );

    Ok(canvas.finish_svg())
}

type Range = (f64, f64);

fn data_bounds(figure: &Figure) -> crate::Result<(Range, Range)> {
    let (mut x_lo, mut x_hi) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_lo, mut y_hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for (si, series) in figure.series.iter().enumerate() {
        for &(x, y) in &series.points {
            if !x.is_finite() || !y.is_finite() {
                return Err(PlotError::NonFinite {
                    series: si,
                    label: series.label.clone(),
                });
            }
            x_lo = x_lo.min(x);
            x_hi = x_hi.max(x);
            y_lo = y_lo.min(y);
            y_hi = y_hi.max(y);
        }
    }
    if x_lo > x_hi {
        return Err(PlotError::NoData);
    }
    Ok(((x_lo, x_hi), (y_lo, y_hi)))
}
