//! Integration tests for the magnification line fit on bench data.
//!
//! Expected values were pinned from a reference least-squares run over the
//! seven-point bench dataset.

use approx::assert_abs_diff_eq;
use lensfit_core::{dataset::reference_bench, Real};
use lensfit_linear::{fit_line, r_squared};

#[test]
fn reference_bench_fit_matches_pinned_values() {
    let set = reference_bench();
    let m = set.magnification();
    let fit = fit_line(set.image_distances(), &m).unwrap();

    assert_abs_diff_eq!(fit.slope, -0.043792097913586, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.intercept, 0.831803433546903, epsilon = 1e-8);

    let r2 = r_squared(&m, &fit.predict_all(set.image_distances())).unwrap();
    assert!((0.0..=1.0).contains(&r2), "R² out of range: {r2}");
    assert_abs_diff_eq!(r2, 0.870399833482466, epsilon = 1e-6);
}

#[test]
fn residuals_satisfy_normal_equations() {
    let set = reference_bench();
    let d = set.image_distances();
    let m = set.magnification();
    let fit = fit_line(d, &m).unwrap();
    let r = fit.residuals(d, &m);

    let sum: Real = r.iter().sum();
    let weighted: Real = r.iter().zip(d.iter()).map(|(r, d)| r * d).sum();
    assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(weighted, 0.0, epsilon = 1e-9);
}

#[test]
fn perfectly_linear_data_has_unit_r_squared() {
    let x: Vec<Real> = (0..12).map(|i| 20.0 + 0.75 * i as Real).collect();
    let y: Vec<Real> = x.iter().map(|x| -x / 20.0 + 1.0).collect();
    let fit = fit_line(&x, &y).unwrap();

    assert_abs_diff_eq!(fit.slope, -0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.intercept, 1.0, epsilon = 1e-10);
    let r2 = r_squared(&y, &fit.predict_all(&x)).unwrap();
    assert_abs_diff_eq!(r2, 1.0, epsilon = 1e-9);
}

#[test]
fn repeated_fits_are_bit_identical() {
    let set = reference_bench();
    let m = set.magnification();
    let a = fit_line(set.image_distances(), &m).unwrap();
    let b = fit_line(set.image_distances(), &m).unwrap();
    assert_eq!(a.slope.to_bits(), b.slope.to_bits());
    assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
}
