use std::path::Path;

use anyhow::{Context, Result};
use lensfit_plot::{render_figure, render_to_file, Figure, Series, SeriesKind};

use crate::summary::annotation_lines;
use crate::types::{LensFitConfig, LensFitReport};

/// Assemble the scatter-and-fit figure for a report.
///
/// Series, bottom to top: dashed theoretical line, solid fitted line through
/// the measured image distances, measured points.
pub fn build_figure(report: &LensFitReport, config: &LensFitConfig) -> Figure {
    let colors = &config.plot.colors;

    let data: Vec<(f64, f64)> = report
        .image_distances
        .iter()
        .copied()
        .zip(report.magnification.iter().copied())
        .collect();
    let fitted: Vec<(f64, f64)> = report
        .image_distances
        .iter()
        .copied()
        .zip(report.fitted.iter().copied())
        .collect();

    let title = match config.object_distance {
        Some(d_o) => format!(
            "Linear fit of M vs dᵢ (object distance {d_o} cm, signed magnification)"
        ),
        None => "Linear fit of M vs dᵢ (signed magnification)".to_string(),
    };

    Figure {
        title,
        x_label: "Image distance dᵢ (cm)".into(),
        y_label: "Magnification M = −hᵢ/h₀".into(),
        series: vec![
            Series::new(
                SeriesKind::DashedLine,
                format!(
                    "Theoretical model (f={} cm)",
                    config.theory.model.focal_length
                ),
                colors.theory,
                report.theory_curve.clone(),
            ),
            Series::new(
                SeriesKind::Line,
                format!(
                    "Linear fit: M = {:.4}·d_i + {:.4}",
                    report.slope, report.intercept
                ),
                colors.fit,
                fitted,
            ),
            Series::new(
                SeriesKind::Scatter,
                "Experimental data",
                colors.data,
                data,
            )
            .with_edge(colors.data_edge),
        ],
        annotation: annotation_lines(report),
    }
}

/// Render the report figure to an SVG string.
pub fn render_report_plot(report: &LensFitReport, config: &LensFitConfig) -> Result<String> {
    render_figure(&build_figure(report, config), &config.plot).context("failed to render plot")
}

/// Render the report figure to `path` (format from the extension).
pub fn write_report_plot(
    report: &LensFitReport,
    config: &LensFitConfig,
    path: &Path,
) -> Result<()> {
    render_to_file(&build_figure(report, config), path, &config.plot)
        .with_context(|| format!("failed to write plot to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{run_lens_fit, LensFitInput};
    use lensfit_plot::Color;

    #[test]
    fn figure_layers_and_labels() {
        let config = LensFitConfig::default();
        let report = run_lens_fit(&LensFitInput::default(), &config).unwrap();
        let figure = build_figure(&report, &config);

        let kinds: Vec<SeriesKind> = figure.series.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [SeriesKind::DashedLine, SeriesKind::Line, SeriesKind::Scatter]
        );
        assert_eq!(figure.series[0].label, "Theoretical model (f=20 cm)");
        assert_eq!(figure.series[0].points.len(), 100);
        assert_eq!(figure.series[1].label, "Linear fit: M = -0.0438·d_i + 0.8318");
        assert_eq!(figure.series[2].points.len(), 7);
        assert_eq!(figure.series[2].color, Color::ROYAL_BLUE);
        assert_eq!(figure.series[2].edge, Some(Color::BLACK));
        assert_eq!(figure.annotation.len(), 5);
        assert!(!figure.title.contains("object distance"));
    }

    #[test]
    fn object_distance_goes_into_title() {
        let config = LensFitConfig {
            object_distance: Some(45.0),
            ..Default::default()
        };
        let report = run_lens_fit(&LensFitInput::default(), &config).unwrap();
        let figure = build_figure(&report, &config);
        assert!(figure.title.contains("object distance 45 cm"), "{}", figure.title);
    }

    #[test]
    fn svg_contains_legend_and_annotation() {
        let config = LensFitConfig::default();
        let report = run_lens_fit(&LensFitInput::default(), &config).unwrap();
        let svg = render_report_plot(&report, &config).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Theoretical model (f=20 cm)"));
        assert!(svg.contains("f_exp = 22.84 cm"));
        assert!(svg.contains("R² = 0.8704"));
    }
}
