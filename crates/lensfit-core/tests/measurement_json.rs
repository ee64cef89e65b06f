use approx::assert_abs_diff_eq;
use lensfit_core::{dataset::reference_bench, MeasurementError, MeasurementSet, OpticalParameters};

#[test]
fn reference_bench_survives_json() {
    let set = reference_bench();
    let json = serde_json::to_string(&set).unwrap();
    let back: MeasurementSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 7);
    assert_eq!(back.object_height(), 2.4);
    for (a, b) in back.magnification().iter().zip(set.magnification().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-15);
    }
}

#[test]
fn json_goes_through_validation() {
    let mismatched = r#"{"image_distances":[25.0,26.0],"image_heights":[1.0],"object_height":2.4}"#;
    let err = serde_json::from_str::<MeasurementSet>(mismatched).unwrap_err();
    assert!(err.to_string().contains("differ in length (2 vs 1)"), "{err}");

    let zero_height = r#"{"image_distances":[25.0],"image_heights":[1.0],"object_height":0.0}"#;
    assert!(serde_json::from_str::<MeasurementSet>(zero_height).is_err());
}

#[test]
fn error_values_are_descriptive() {
    let err = MeasurementSet::new(vec![], vec![], 2.4).unwrap_err();
    assert_eq!(err, MeasurementError::Empty);
    assert!(!err.to_string().is_empty());
}

#[test]
fn slope_to_lens_parameters() {
    let optics = OpticalParameters::from_slope(-0.05).unwrap();
    assert_abs_diff_eq!(optics.focal_length, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(optics.radius_of_curvature, 40.0, epsilon = 1e-12);
}
