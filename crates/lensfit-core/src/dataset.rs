//! Reference optical-bench dataset.
//!
//! Seven image distance / image height pairs recorded for a converging lens
//! with a fixed object height. Values are in centimetres.

use crate::{MeasurementSet, Real};

/// Image distances `d_i` (cm).
pub const REFERENCE_IMAGE_DISTANCES_CM: [Real; 7] = [30.4, 29.0, 28.0, 27.0, 26.2, 25.4, 25.0];

/// Image heights `h_i` (cm).
pub const REFERENCE_IMAGE_HEIGHTS_CM: [Real; 7] = [1.1, 1.1, 1.0, 0.9, 0.8, 0.7, 0.5];

/// Object height `h_o` (cm).
pub const REFERENCE_OBJECT_HEIGHT_CM: Real = 2.4;

/// The reference bench measurements.
pub fn reference_bench() -> MeasurementSet {
    MeasurementSet::new(
        REFERENCE_IMAGE_DISTANCES_CM.to_vec(),
        REFERENCE_IMAGE_HEIGHTS_CM.to_vec(),
        REFERENCE_OBJECT_HEIGHT_CM,
    )
    .expect("reference bench dataset is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_magnification_matches_height_ratio() {
        let set = reference_bench();
        assert_eq!(set.len(), 7);

        let expected = [
            -0.4583, -0.4583, -0.4167, -0.3750, -0.3333, -0.2917, -0.2083,
        ];
        for (i, m) in set.magnification().iter().enumerate() {
            assert_abs_diff_eq!(
                *m,
                -REFERENCE_IMAGE_HEIGHTS_CM[i] / REFERENCE_OBJECT_HEIGHT_CM,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(*m, expected[i], epsilon = 5e-5);
        }
    }
}
