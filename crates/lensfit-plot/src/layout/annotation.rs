use crate::canvas::Canvas;
use crate::color::Color;
use crate::layout::area::PlotArea;
use crate::primitives::*;

/// Draw a boxed multi-line text block anchored at the bottom-left corner of
/// the plot area, offset by `inset` (fraction of the area size).
pub fn draw_annotation(
    canvas: &mut Canvas,
    area: &PlotArea,
    lines: &[String],
    font_size: f64,
    inset: f64,
) {
    if lines.is_empty() {
        return;
    }

    let padding = 5.0;
    let line_height = font_size * 1.3;
    let style = TextStyle {
        size: font_size,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    let text_w = lines
        .iter()
        .map(|l| canvas.measure_text(l, &style).width)
        .fold(0.0_f64, f64::max);
    let box_w = text_w + 2.0 * padding;
    let box_h = lines.len() as f64 * line_height + 2.0 * padding;

    let x = area.left + inset * area.width;
    let y = area.bottom() - inset * area.height - box_h;

    canvas.rect(
        x,
        y,
        box_w,
        box_h,
        &Style {
            fill: Some(Color::WHITE.with_alpha(0.8)),
            stroke: Some(Color::BLACK),
            stroke_width: 0.8,
        },
    );
    for (i, line) in lines.iter().enumerate() {
        canvas.text(
            x + padding,
            y + padding + i as f64 * line_height,
            line,
            &style,
        );
    }
}
