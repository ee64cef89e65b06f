use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Plot appearance. Every field has a default, so partial JSON works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub marker_radius: f64,
    pub line_width: f64,
    /// Offset of the annotation box from the bottom-left corner, as a
    /// fraction of the plot area.
    pub annotation_inset: f64,
    pub output: OutputConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            font: FontConfig::default(),
            grid: GridConfig::default(),
            colors: ColorsConfig::default(),
            marker_radius: 5.0,
            line_width: 2.0,
            annotation_inset: 0.02,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 720.0,  // 10" * 72
            height: 432.0, // 6" * 72
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub title_size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub legend_size: f64,
    pub annotation_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            title_size: 14.0,
            label_size: 12.0,
            tick_size: 10.0,
            legend_size: 10.0,
            annotation_size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show: true,
            color: Color::hex("#b0b0b0"),
            alpha: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub data: Color,
    pub data_edge: Color,
    pub fit: Color,
    pub theory: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            data: Color::ROYAL_BLUE,
            data_edge: Color::BLACK,
            fit: Color::GREEN,
            theory: Color::ORANGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Raster resolution for PNG output.
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dpi: 150 }
    }
}
