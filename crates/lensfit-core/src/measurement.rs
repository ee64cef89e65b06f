use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{min_max, Real};

/// Errors raised when building a [`MeasurementSet`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasurementError {
    /// Image distance and image height series differ in length.
    #[error("image distances and image heights differ in length ({distances} vs {heights})")]
    LengthMismatch { distances: usize, heights: usize },
    /// No measurement pairs were supplied.
    #[error("need at least one measurement pair")]
    Empty,
    /// A value is NaN or infinite.
    #[error("{field}[{index}] is not finite")]
    NonFinite { field: &'static str, index: usize },
    /// The object height is zero (or not finite), so magnification is undefined.
    #[error("object height must be finite and non-zero, got {0}")]
    ZeroObjectHeight(Real),
}

/// Optical-bench observations: image distance and image height per pair,
/// plus the fixed object height. All lengths share one unit (cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurementSet")]
pub struct MeasurementSet {
    image_distances: Vec<Real>,
    image_heights: Vec<Real>,
    object_height: Real,
}

#[derive(Deserialize)]
struct RawMeasurementSet {
    image_distances: Vec<Real>,
    image_heights: Vec<Real>,
    object_height: Real,
}

impl TryFrom<RawMeasurementSet> for MeasurementSet {
    type Error = MeasurementError;

    fn try_from(raw: RawMeasurementSet) -> Result<Self, Self::Error> {
        Self::new(raw.image_distances, raw.image_heights, raw.object_height)
    }
}

impl MeasurementSet {
    /// Build a measurement set, checking that the series pair up and that
    /// magnification is defined for every entry.
    pub fn new(
        image_distances: Vec<Real>,
        image_heights: Vec<Real>,
        object_height: Real,
    ) -> Result<Self, MeasurementError> {
        if image_distances.len() != image_heights.len() {
            return Err(MeasurementError::LengthMismatch {
                distances: image_distances.len(),
                heights: image_heights.len(),
            });
        }
        if image_distances.is_empty() {
            return Err(MeasurementError::Empty);
        }
        if let Some(index) = image_distances.iter().position(|v| !v.is_finite()) {
            return Err(MeasurementError::NonFinite {
                field: "image_distances",
                index,
            });
        }
        if let Some(index) = image_heights.iter().position(|v| !v.is_finite()) {
            return Err(MeasurementError::NonFinite {
                field: "image_heights",
                index,
            });
        }
        if object_height == 0.0 || !object_height.is_finite() {
            return Err(MeasurementError::ZeroObjectHeight(object_height));
        }

        Ok(Self {
            image_distances,
            image_heights,
            object_height,
        })
    }

    pub fn image_distances(&self) -> &[Real] {
        &self.image_distances
    }

    pub fn image_heights(&self) -> &[Real] {
        &self.image_heights
    }

    pub fn object_height(&self) -> Real {
        self.object_height
    }

    pub fn len(&self) -> usize {
        self.image_distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_distances.is_empty()
    }

    /// `(image distance, image height)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.image_distances
            .iter()
            .copied()
            .zip(self.image_heights.iter().copied())
    }

    /// Signed magnification `M[i] = -h_i[i] / h_o`.
    ///
    /// The sign encodes the inversion of a real image; one value per pair,
    /// same ordering as the input series.
    pub fn magnification(&self) -> Vec<Real> {
        self.image_heights
            .iter()
            .map(|h_i| -h_i / self.object_height)
            .collect()
    }

    /// Smallest and largest image distance.
    pub fn image_distance_range(&self) -> (Real, Real) {
        // Non-empty by construction.
        min_max(&self.image_distances).unwrap_or((0.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = MeasurementSet::new(vec![1.0, 2.0], vec![1.0], 2.0).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::LengthMismatch {
                distances: 2,
                heights: 1
            }
        );
    }

    #[test]
    fn rejects_empty_and_zero_object_height() {
        assert_eq!(
            MeasurementSet::new(vec![], vec![], 2.0).unwrap_err(),
            MeasurementError::Empty
        );
        assert!(matches!(
            MeasurementSet::new(vec![1.0], vec![1.0], 0.0),
            Err(MeasurementError::ZeroObjectHeight(_))
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = MeasurementSet::new(vec![1.0, f64::NAN], vec![1.0, 2.0], 1.0).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::NonFinite {
                field: "image_distances",
                index: 1
            }
        );
    }

    #[test]
    fn magnification_is_negated_height_ratio() {
        let set = MeasurementSet::new(vec![10.0, 20.0], vec![1.0, -0.5], 2.0).unwrap();
        assert_eq!(set.magnification(), vec![-0.5, 0.25]);
        assert_eq!(set.image_distance_range(), (10.0, 20.0));
        assert_eq!(set.pairs().collect::<Vec<_>>(), vec![(10.0, 1.0), (20.0, -0.5)]);
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let ok: MeasurementSet = serde_json::from_str(
            r#"{"image_distances":[1.0,2.0],"image_heights":[0.5,0.4],"object_height":1.0}"#,
        )
        .unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<MeasurementSet>(
            r#"{"image_distances":[1.0],"image_heights":[0.5,0.4],"object_height":1.0}"#,
        );
        assert!(bad.is_err());
    }
}
