use anyhow::{ensure, Context, Result};
use lensfit_core::OpticalParameters;
use lensfit_linear::{fit_polynomial, r_squared, rms_residual, LineFit};
use log::{debug, info};

use crate::types::{LensFitConfig, LensFitInput, LensFitReport};

/// Fit `M = a * d_i + b` to the signed magnification and derive the lens
/// parameters.
///
/// Steps:
/// 1. `M[i] = -h_i[i] / h_o`
/// 2. least-squares line through `(d_i, M)` (degree-1 polynomial fit)
/// 3. `R²` of measured vs fitted `M`
/// 4. `f = -1/a`, `R = 2f`
/// 5. theoretical line over `[min d_i - padding, max d_i + padding]`
///
/// # Errors
///
/// Fails if the theory settings cannot produce a finite curve, if the line
/// cannot be fitted (fewer than two distinct image distances) or if the
/// fitted slope is exactly zero.
pub fn run_lens_fit(input: &LensFitInput, config: &LensFitConfig) -> Result<LensFitReport> {
    let set = &input.measurements;
    let d = set.image_distances();
    let theory = &config.theory;
    ensure!(
        theory.padding.is_finite(),
        "theory padding must be finite, got {}",
        theory.padding
    );
    ensure!(
        theory.model.focal_length.is_finite() && theory.model.focal_length != 0.0,
        "theoretical focal length must be finite and non-zero, got {}",
        theory.model.focal_length
    );
    ensure!(
        theory.model.intercept.is_finite(),
        "theoretical intercept must be finite, got {}",
        theory.model.intercept
    );

    let magnification = set.magnification();
    debug!("magnification over {} points: {:?}", set.len(), magnification);

    let coeffs =
        fit_polynomial(d, &magnification, 1).context("least-squares fit of M vs d_i failed")?;
    let line = LineFit::from_polynomial(&coeffs)
        .with_context(|| format!("expected 2 line coefficients, got {}", coeffs.len()))?;
    let fitted = line.predict_all(d);
    let residuals = line.residuals(d, &magnification);
    let r2 = r_squared(&magnification, &fitted)?;
    debug!(
        "fit: a = {:.6}, b = {:.6}, R² = {:.4}, rms = {:.3e}",
        line.slope,
        line.intercept,
        r2,
        rms_residual(&magnification, &fitted)?
    );

    let optics = OpticalParameters::from_slope(line.slope)
        .context("cannot derive focal length from the fitted slope")?;
    info!(
        "f_exp = {:.3} cm, R_exp = {:.3} cm",
        optics.focal_length, optics.radius_of_curvature
    );

    let theory_curve =
        theory
            .model
            .padded_curve(set.image_distance_range(), theory.padding, theory.samples);

    Ok(LensFitReport {
        num_points: set.len(),
        image_distances: d.to_vec(),
        magnification,
        slope: line.slope,
        intercept: line.intercept,
        r_squared: r2,
        focal_length: optics.focal_length,
        radius_of_curvature: optics.radius_of_curvature,
        fitted,
        residuals,
        theory_curve,
    })
}
