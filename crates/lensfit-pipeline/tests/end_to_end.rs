use approx::assert_abs_diff_eq;
use lensfit_core::MeasurementSet;
use lensfit_pipeline::{
    run_lens_fit, write_report_plot, LensFitConfig, LensFitInput, LensFitReport,
};

fn reference_run() -> LensFitReport {
    run_lens_fit(&LensFitInput::default(), &LensFitConfig::default()).unwrap()
}

#[test]
fn reference_bench_pinned_values() {
    let report = reference_run();
    assert_eq!(report.num_points, 7);
    assert_abs_diff_eq!(report.slope, -0.043792, epsilon = 1e-4);
    assert_abs_diff_eq!(report.intercept, 0.831803, epsilon = 1e-4);
    assert_abs_diff_eq!(report.r_squared, 0.870400, epsilon = 1e-4);
    assert_abs_diff_eq!(report.focal_length, 22.835170, epsilon = 1e-4);
    assert_abs_diff_eq!(report.radius_of_curvature, 45.670340, epsilon = 1e-4);
    assert_abs_diff_eq!(report.radius_of_curvature, 2.0 * report.focal_length);
}

#[test]
fn residuals_satisfy_normal_equations() {
    let report = reference_run();
    let sum: f64 = report.residuals.iter().sum();
    let weighted: f64 = report
        .residuals
        .iter()
        .zip(report.image_distances.iter())
        .map(|(r, d)| r * d)
        .sum();
    assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(weighted, 0.0, epsilon = 1e-9);
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(reference_run(), reference_run());
}

#[test]
fn perfectly_linear_input() {
    // M = -0.05 d + 1 with h_o = 2, so h = 0.1 d - 2
    let d = vec![22.0, 24.0, 26.0, 28.0, 30.0];
    let h: Vec<f64> = d.iter().map(|d| 0.1 * d - 2.0).collect();
    let input = LensFitInput {
        measurements: MeasurementSet::new(d, h, 2.0).unwrap(),
    };
    let report = run_lens_fit(&input, &LensFitConfig::default()).unwrap();
    assert_abs_diff_eq!(report.r_squared, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(report.focal_length, 20.0, epsilon = 1e-9);
}

#[test]
fn report_serializes_to_json() {
    let report = reference_run();
    let json = serde_json::to_string(&report).unwrap();
    let back: LensFitReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.num_points, report.num_points);
    assert_abs_diff_eq!(back.slope, report.slope, epsilon = 1e-15);
}

#[test]
fn plot_is_written_as_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fit.svg");
    let config = LensFitConfig {
        object_distance: Some(45.0),
        ..Default::default()
    };
    let report = run_lens_fit(&LensFitInput::default(), &config).unwrap();
    write_report_plot(&report, &config, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Experimental data"));
    assert!(svg.contains("object distance 45 cm"));
}
