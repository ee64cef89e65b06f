//! Least-squares polynomial fitting.
//!
//! Fits `y ≈ c_0 x^n + c_1 x^(n-1) + ... + c_n` by solving the Vandermonde
//! system in the least-squares sense. Coefficients are returned highest power
//! first.
//!
//! # Conditioning
//!
//! Image distances sit far from the origin (25–30 cm) with a small spread, so
//! the raw Vandermonde matrix is poorly conditioned even for degree 1. The
//! abscissae are centred and scaled to `[-1, 1]` before the solve, in the same
//! spirit as Hartley normalization for DLT, and the coefficients are mapped
//! back to the original variable afterwards.
//!
//! # Example
//!
//! ```
//! use lensfit_linear::polyfit::fit_polynomial;
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 3.0, 5.0, 7.0];
//! let c = fit_polynomial(&x, &y, 1).unwrap();
//! assert!((c[0] - 2.0).abs() < 1e-12);
//! assert!((c[1] - 1.0).abs() < 1e-12);
//! ```

use lensfit_core::Real;
use log::debug;
use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Errors from least-squares fitting.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("x and y differ in length ({0} vs {1})")]
    LengthMismatch(usize, usize),
    #[error("need at least {needed} points, got {got}")]
    NotEnoughPoints { needed: usize, got: usize },
    #[error("input contains a non-finite value at index {0}")]
    NonFinite(usize),
    /// All abscissae coincide or the design matrix is rank deficient.
    #[error("degenerate configuration: design matrix is rank deficient")]
    Degenerate,
    #[error("svd failed")]
    SvdFailed,
}

/// Relative singular-value threshold used for rank detection.
const RANK_EPS: Real = 1e-12;

/// Least-squares polynomial of the given degree, highest power first.
///
/// # Errors
///
/// - `LengthMismatch`: `x` and `y` have different lengths
/// - `NotEnoughPoints`: fewer than `degree + 1` samples
/// - `NonFinite`: NaN or infinite input
/// - `Degenerate`: fewer than `degree + 1` distinct abscissae
/// - `SvdFailed`: numerical failure in the linear solve
pub fn fit_polynomial(x: &[Real], y: &[Real], degree: usize) -> Result<Vec<Real>, FitError> {
    let n = x.len();
    if y.len() != n {
        return Err(FitError::LengthMismatch(n, y.len()));
    }
    let n_coeffs = degree + 1;
    if n < n_coeffs {
        return Err(FitError::NotEnoughPoints {
            needed: n_coeffs,
            got: n,
        });
    }
    if let Some(i) = x
        .iter()
        .zip(y.iter())
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(FitError::NonFinite(i));
    }

    let (center, scale) = if degree == 0 {
        (0.0, 1.0)
    } else {
        normalization(x).ok_or(FitError::Degenerate)?
    };

    // Vandermonde in the normalized variable t = (x - center) / scale,
    // highest power in column 0.
    let mut a = DMatrix::<Real>::zeros(n, n_coeffs);
    for (r, &xi) in x.iter().enumerate() {
        let t = (xi - center) / scale;
        let mut p = 1.0;
        for c in (0..n_coeffs).rev() {
            a[(r, c)] = p;
            p *= t;
        }
    }
    // Solve for y - ȳ and fold ȳ back into the constant term, so a constant
    // series yields exactly zero for every non-constant coefficient.
    let y_mean = lensfit_core::mean(y).ok_or(FitError::NotEnoughPoints {
        needed: n_coeffs,
        got: 0,
    })?;
    let b = DVector::<Real>::from_iterator(n, y.iter().map(|&yi| yi - y_mean));

    let svd = a.svd(true, true);
    let max_sv = svd.singular_values.max();
    if svd.rank(max_sv * RANK_EPS) < n_coeffs {
        return Err(FitError::Degenerate);
    }
    let mut coeffs_t = svd
        .solve(&b, max_sv * RANK_EPS)
        .map_err(|_| FitError::SvdFailed)?;
    coeffs_t[degree] += y_mean;

    let coeffs = denormalize(coeffs_t.as_slice(), center, scale);
    debug!(
        "polyfit degree {} over {} points: {:?}",
        degree, n, coeffs
    );
    Ok(coeffs)
}

/// Centre and half-range of the abscissae; `None` if they all coincide.
fn normalization(x: &[Real]) -> Option<(Real, Real)> {
    let (lo, hi) = lensfit_core::min_max(x)?;
    let center = 0.5 * (lo + hi);
    let scale = 0.5 * (hi - lo);
    if scale <= Real::EPSILON * center.abs().max(1.0) {
        return None;
    }
    Some((center, scale))
}

/// Map coefficients of `p(t)`, `t = (x - center) / scale`, to coefficients of
/// the same polynomial in `x`. Both highest power first.
fn denormalize(coeffs_t: &[Real], center: Real, scale: Real) -> Vec<Real> {
    // Horner in polynomial space: q <- q * (x/scale - center/scale) + c_k.
    // `q` is kept lowest power first while accumulating.
    let lin = [-center / scale, 1.0 / scale];
    let mut q: Vec<Real> = Vec::with_capacity(coeffs_t.len());
    for &c in coeffs_t {
        let mut next = vec![0.0; q.len() + 1];
        for (i, &qi) in q.iter().enumerate() {
            next[i] += qi * lin[0];
            next[i + 1] += qi * lin[1];
        }
        next[0] += c;
        q = next;
    }
    q.reverse();
    q
}
