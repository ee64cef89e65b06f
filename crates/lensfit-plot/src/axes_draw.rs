use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::PlotConfig;
use crate::layout::area::PlotArea;
use crate::layout::axes::Axis;
use crate::primitives::*;

/// Draw a box frame with dashed grid, outward ticks, tick labels and axis labels.
pub fn draw_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &PlotConfig,
) {
    let frame_style = LineStyle::solid(Color::BLACK, 0.8);
    let tick_style = LineStyle::solid(Color::BLACK, 0.6);
    let grid_style = LineStyle {
        color: config.grid.color.with_alpha(config.grid.alpha),
        width: 0.6,
        dash: Some("4 3".into()),
    };
    let tl = 4.0;

    // --- X axis ---
    let x_tick_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };
    for (val, label) in x_axis.tick_positions.iter().zip(&x_axis.tick_labels) {
        let px = x_axis.data_to_pixel(*val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        if config.grid.show {
            canvas.line(px, area.top, px, area.bottom(), &grid_style);
        }
        canvas.line(px, area.bottom(), px, area.bottom() + tl, &tick_style);
        canvas.text(px, area.bottom() + tl + 3.0, label, &x_tick_label_style);
    }

    // --- Y axis ---
    let y_tick_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    let mut max_label_w: f64 = 0.0;
    for (val, label) in y_axis.tick_positions.iter().zip(&y_axis.tick_labels) {
        let py = y_axis.data_to_pixel(*val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        if config.grid.show {
            canvas.line(area.left, py, area.right(), py, &grid_style);
        }
        canvas.line(area.left, py, area.left - tl, py, &tick_style);
        canvas.text(area.left - tl - 3.0, py, label, &y_tick_label_style);
        max_label_w = max_label_w.max(canvas.measure_text(label, &y_tick_label_style).width);
    }

    // Frame on top of the grid.
    canvas.line(area.left, area.top, area.right(), area.top, &frame_style);
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &frame_style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &frame_style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &frame_style);

    // --- Axis labels ---
    let label_style = TextStyle {
        size: config.font.label_size,
        anchor: TextAnchor::Middle,
        ..Default::default()
    };
    if !x_axis.label.is_empty() {
        let y = area.bottom() + tl + 3.0 + config.font.tick_size + 6.0 + config.font.label_size;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.label, &label_style);
    }
    if !y_axis.label.is_empty() {
        let x = area.left - tl - 3.0 - max_label_w - 8.0;
        let y = area.top + area.height / 2.0;
        canvas.text_rotated(x, y, &y_axis.label, &label_style, -90.0);
    }
}
