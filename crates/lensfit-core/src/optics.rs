use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Real;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OpticsError {
    /// `f = -1/a` is undefined for a flat magnification trend.
    #[error("division by zero: magnification slope is exactly zero")]
    ZeroSlope,
    #[error("magnification slope is not finite: {0}")]
    NonFiniteSlope(Real),
}

/// Lens parameters derived from the slope of `M = a * d_i + b`.
///
/// For a thin lens `M = 1 - d_i / f`, so the slope is `a = -1/f`. The radius
/// of curvature of the equivalent spherical mirror is `R = 2f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalParameters {
    pub focal_length: Real,
    pub radius_of_curvature: Real,
}

impl OpticalParameters {
    /// `f = -1/a`, `R = 2f`.
    ///
    /// # Errors
    ///
    /// - [`OpticsError::ZeroSlope`] if `slope == 0.0`
    /// - [`OpticsError::NonFiniteSlope`] for NaN or infinite slopes
    pub fn from_slope(slope: Real) -> Result<Self, OpticsError> {
        if !slope.is_finite() {
            return Err(OpticsError::NonFiniteSlope(slope));
        }
        if slope == 0.0 {
            return Err(OpticsError::ZeroSlope);
        }

        let focal_length = -1.0 / slope;
        let radius_of_curvature = 2.0 * focal_length;
        debug!(
            "slope {:.6} -> f = {:.3}, R = {:.3}",
            slope, focal_length, radius_of_curvature
        );

        Ok(Self {
            focal_length,
            radius_of_curvature,
        })
    }
}

/// Derivative `df/da` of `f = -1/a`, i.e. `1/a²`.
///
/// A slope error `Δa` moves the focal length by roughly `Δa / a²`.
pub fn focal_length_sensitivity(slope: Real) -> Result<Real, OpticsError> {
    if !slope.is_finite() {
        return Err(OpticsError::NonFiniteSlope(slope));
    }
    if slope == 0.0 {
        return Err(OpticsError::ZeroSlope);
    }
    Ok(1.0 / (slope * slope))
}
