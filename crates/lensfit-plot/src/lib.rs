//! SVG scatter-and-line figures.
//!
//! A [`Figure`] is a list of series (scatter, solid line, dashed line) plus an
//! optional annotation block. [`render_figure`] lays it out on a [`Canvas`]
//! with nice-number axes, a dashed grid and a legend, and returns the SVG
//! document. PNG output is available with the `png` feature.

mod axes_draw;
pub mod canvas;
pub mod color;
pub mod config;
mod figure;
pub mod layout;
pub mod output;
pub mod primitives;
pub mod text;

use std::path::Path;

use thiserror::Error;

pub use canvas::Canvas;
pub use color::Color;
pub use config::PlotConfig;
pub use figure::{render_figure, Figure, Series, SeriesKind};

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: every series is empty")]
    NoData,
    #[error("series {series} ('{label}') contains a non-finite point")]
    NonFinite { series: usize, label: String },
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;

/// Encode an SVG document in the given format (`svg`, or `png` with the
/// `png` feature).
#[cfg_attr(not(feature = "png"), allow(unused_variables))]
pub fn encode(svg: String, format: &str, config: &PlotConfig) -> Result<Vec<u8>> {
    match format.to_ascii_lowercase().as_str() {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        other => Err(PlotError::UnsupportedFormat(other.to_string())),
    }
}

/// Render a figure to a file; the format follows the extension (default `svg`).
pub fn render_to_file(figure: &Figure, path: &Path, config: &PlotConfig) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let svg = render_figure(figure, config)?;
    if ext.eq_ignore_ascii_case("svg") {
        output::svg::save_svg(&svg, path)?;
    } else {
        let bytes = encode(svg, ext, config)?;
        std::fs::write(path, bytes)?;
    }
    log::info!("wrote plot to {}", path.display());
    Ok(())
}
