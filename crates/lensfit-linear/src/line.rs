use lensfit_core::{mean, Real};
use serde::{Deserialize, Serialize};

use crate::polyfit::FitError;

/// Straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: Real,
    pub intercept: Real,
}

impl LineFit {
    pub fn predict(&self, x: Real) -> Real {
        self.slope * x + self.intercept
    }

    pub fn predict_all(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Line from degree-1 polynomial coefficients `[slope, intercept]`, as
    /// returned by [`fit_polynomial`](crate::polyfit::fit_polynomial).
    pub fn from_polynomial(coeffs: &[Real]) -> Option<Self> {
        match *coeffs {
            [slope, intercept] => Some(Self { slope, intercept }),
            _ => None,
        }
    }

    /// `y_i - predict(x_i)` for each pair.
    pub fn residuals(&self, x: &[Real], y: &[Real]) -> Vec<Real> {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }
}

/// Ordinary least-squares line through `(x, y)`.
///
/// Closed form on centred data: `slope = Sxy / Sxx`,
/// `intercept = ȳ - slope * x̄`. Centring keeps the sums well conditioned when
/// `x` sits far from the origin, and a constant `y` yields a slope of exactly
/// zero. Agrees with [`fit_polynomial`](crate::polyfit::fit_polynomial) of degree 1.
///
/// Residuals of the result satisfy the normal equations: they sum to zero and
/// are orthogonal to `x`.
pub fn fit_line(x: &[Real], y: &[Real]) -> Result<LineFit, FitError> {
    let n = x.len();
    if y.len() != n {
        return Err(FitError::LengthMismatch(n, y.len()));
    }
    if n < 2 {
        return Err(FitError::NotEnoughPoints { needed: 2, got: n });
    }
    if let Some(i) = x
        .iter()
        .zip(y.iter())
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(FitError::NonFinite(i));
    }

    let x_mean = mean(x).ok_or(FitError::NotEnoughPoints { needed: 2, got: 0 })?;
    let y_mean = mean(y).ok_or(FitError::NotEnoughPoints { needed: 2, got: 0 })?;
    let (sxx, sxy) = x
        .iter()
        .zip(y.iter())
        .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean))
        });
    if sxx <= 0.0 {
        return Err(FitError::Degenerate);
    }

    let slope = sxy / sxx;
    Ok(LineFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn perfect_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = fit_line(&x, &y).unwrap();
        assert_abs_diff_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        for r in fit.residuals(&x, &y) {
            assert_abs_diff_eq!(r, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn horizontal_line() {
        let fit = fit_line(&[0.0, 1.0, 2.0, 3.0], &[5.0; 4]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
    }

    #[test]
    fn agrees_with_degree_one_polyfit() {
        let x = [30.4, 29.0, 28.0, 27.0, 26.2, 25.4, 25.0];
        let y = [-0.46, -0.45, -0.42, -0.37, -0.33, -0.29, -0.21];
        let fit = fit_line(&x, &y).unwrap();
        let c = crate::fit_polynomial(&x, &y, 1).unwrap();
        assert_abs_diff_eq!(fit.slope, c[0], epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, c[1], epsilon = 1e-10);
    }

    #[test]
    fn from_polynomial_needs_two_coefficients() {
        assert_eq!(
            LineFit::from_polynomial(&[-0.05, 1.0]),
            Some(LineFit { slope: -0.05, intercept: 1.0 })
        );
        assert_eq!(LineFit::from_polynomial(&[1.0]), None);
        assert_eq!(LineFit::from_polynomial(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn input_errors() {
        assert_eq!(fit_line(&[1.0], &[1.0]), Err(FitError::NotEnoughPoints { needed: 2, got: 1 }));
        assert_eq!(fit_line(&[2.0, 2.0], &[1.0, 3.0]), Err(FitError::Degenerate));
        assert_eq!(fit_line(&[1.0, 2.0], &[1.0]), Err(FitError::LengthMismatch(2, 1)));
    }

    #[test]
    fn noisy_data_satisfies_normal_equations() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.1, 1.05, 1.98, 3.02, 3.95];
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - 1.0).abs() < 0.1);
        assert!(fit.intercept.abs() < 0.1);

        let r = fit.residuals(&x, &y);
        let sum: Real = r.iter().sum();
        let weighted: Real = r.iter().zip(x.iter()).map(|(r, x)| r * x).sum();
        assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(weighted, 0.0, epsilon = 1e-10);
    }
}
