use serde::{Deserialize, Serialize};

use crate::{linspace, Real};

/// Straight-line magnification model `M = -d_i / f + intercept` for a lens of
/// known focal length. Drawn next to the fit for comparison only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TheoreticalModel {
    /// Nominal focal length (cm).
    pub focal_length: Real,
    pub intercept: Real,
}

impl Default for TheoreticalModel {
    fn default() -> Self {
        Self {
            focal_length: 20.0,
            intercept: 1.0,
        }
    }
}

impl TheoreticalModel {
    pub fn slope(&self) -> Real {
        -1.0 / self.focal_length
    }

    pub fn evaluate(&self, image_distance: Real) -> Real {
        -image_distance / self.focal_length + self.intercept
    }

    /// Model sampled at `samples` evenly spaced points over `[x_min, x_max]`.
    pub fn curve(&self, x_min: Real, x_max: Real, samples: usize) -> Vec<(Real, Real)> {
        linspace(x_min, x_max, samples)
            .into_iter()
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }

    /// Model sampled over `[lo - padding, hi + padding]`.
    pub fn padded_curve(
        &self,
        (lo, hi): (Real, Real),
        padding: Real,
        samples: usize,
    ) -> Vec<(Real, Real)> {
        self.curve(lo - padding, hi + padding, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_twenty_centimetres() {
        let model = TheoreticalModel::default();
        assert_eq!(model.slope(), -1.0 / 20.0);
        assert_eq!(model.evaluate(20.0), 0.0);
        assert_eq!(model.evaluate(0.0), 1.0);
    }

    #[test]
    fn padded_curve_spans_range() {
        let model = TheoreticalModel::default();
        let curve = model.padded_curve((25.0, 30.4), 1.0, 100);
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].0, 24.0);
        assert!((curve[99].0 - 31.4).abs() < 1e-12);
        for (x, y) in curve {
            assert!((y - (1.0 - x / 20.0)).abs() < 1e-12);
        }
    }
}
