//! Input, configuration and report types for the magnification fit.

use lensfit_core::{dataset::reference_bench, MeasurementSet, Real, TheoreticalModel};
use lensfit_plot::PlotConfig;
use serde::{Deserialize, Serialize};

/// Measurements to fit. Defaults to the reference bench dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensFitInput {
    pub measurements: MeasurementSet,
}

impl Default for LensFitInput {
    fn default() -> Self {
        Self {
            measurements: reference_bench(),
        }
    }
}

/// Theoretical comparison line and its sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TheoryConfig {
    pub model: TheoreticalModel,
    /// Number of evenly spaced samples.
    pub samples: usize,
    /// Extension of the image distance range on both sides (cm).
    pub padding: Real,
}

impl Default for TheoryConfig {
    fn default() -> Self {
        Self {
            model: TheoreticalModel::default(),
            samples: 100,
            padding: 1.0,
        }
    }
}

/// Pipeline configuration. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LensFitConfig {
    pub theory: TheoryConfig,
    pub plot: PlotConfig,
    /// Optional object distance note for the plot title (cm). Never enters
    /// the fit; unset by default.
    pub object_distance: Option<Real>,
}

/// Result of the magnification fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensFitReport {
    pub num_points: usize,
    pub image_distances: Vec<Real>,
    /// Signed magnification `-h_i / h_o`, one per measurement.
    pub magnification: Vec<Real>,
    /// Slope `a` of `M = a * d_i + b`.
    pub slope: Real,
    /// Intercept `b` of `M = a * d_i + b`.
    pub intercept: Real,
    pub r_squared: Real,
    /// Experimental focal length `f = -1/a` (cm).
    pub focal_length: Real,
    /// Experimental radius of curvature `R = 2f` (cm).
    pub radius_of_curvature: Real,
    /// `a * d_i + b` at each measured image distance.
    pub fitted: Vec<Real>,
    pub residuals: Vec<Real>,
    /// Theoretical model sampled over the padded image distance range.
    pub theory_curve: Vec<(Real, Real)>,
}
