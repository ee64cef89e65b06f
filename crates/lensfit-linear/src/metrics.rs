use lensfit_core::{mean, Real};

use crate::polyfit::FitError;

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// When the measured series is constant (`SS_tot == 0`) the ratio is
/// undefined; the result is `1.0` for an exact fit and `0.0` otherwise.
/// The value is not clamped: a model worse than the mean gives `R² < 0`.
pub fn r_squared(measured: &[Real], fitted: &[Real]) -> Result<Real, FitError> {
    check_pair(measured, fitted)?;
    let y_mean = mean(measured).ok_or(FitError::NotEnoughPoints { needed: 1, got: 0 })?;

    let ss_res: Real = measured
        .iter()
        .zip(fitted.iter())
        .map(|(y, f)| (y - f).powi(2))
        .sum();
    let ss_tot: Real = measured.iter().map(|y| (y - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

/// Root-mean-square of `measured - fitted`.
pub fn rms_residual(measured: &[Real], fitted: &[Real]) -> Result<Real, FitError> {
    check_pair(measured, fitted)?;
    if measured.is_empty() {
        return Err(FitError::NotEnoughPoints { needed: 1, got: 0 });
    }
    let ss: Real = measured
        .iter()
        .zip(fitted.iter())
        .map(|(y, f)| (y - f).powi(2))
        .sum();
    Ok((ss / measured.len() as Real).sqrt())
}

fn check_pair(measured: &[Real], fitted: &[Real]) -> Result<(), FitError> {
    if measured.len() != fitted.len() {
        return Err(FitError::LengthMismatch(measured.len(), fitted.len()));
    }
    Ok(())
}
