/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// Evenly spaced samples over the closed interval `[start, stop]`.
///
/// Matches the usual `linspace` convention: both endpoints are included,
/// `n == 1` yields `[start]` and `n == 0` yields an empty vector.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as Real;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as Real
                    }
                })
                .collect()
        }
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[Real]) -> Option<Real> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Real>() / values.len() as Real)
}

/// Minimum and maximum of a slice, `None` when empty.
pub fn min_max(values: &[Real]) -> Option<(Real, Real)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
