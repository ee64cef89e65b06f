use crate::types::LensFitReport;

/// Console summary of a fit: heading plus five labelled values with fixed
/// precision (6 decimals for the coefficients, 4 for R², 3 for lengths).
pub fn format_summary(report: &LensFitReport) -> String {
    format!(
        "=== Linear fit: M = a * d_i + b ===\n\
         a (slope) = {:.6}\n\
         b (intercept) = {:.6}\n\
         R² = {:.4}\n\
         Experimental focal length f = {:.3} cm\n\
         Experimental radius of curvature R = {:.3} cm",
        report.slope,
        report.intercept,
        report.r_squared,
        report.focal_length,
        report.radius_of_curvature,
    )
}

/// Lines of the in-plot annotation box (coarser precision than the console).
pub fn annotation_lines(report: &LensFitReport) -> Vec<String> {
    vec![
        format!("a = {:.4}", report.slope),
        format!("b = {:.4}", report.intercept),
        format!("R² = {:.4}", report.r_squared),
        format!("f_exp = {:.2} cm", report.focal_length),
        format!("R_exp = {:.2} cm", report.radius_of_curvature),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{run_lens_fit, LensFitConfig, LensFitInput};

    fn reference_report() -> LensFitReport {
        run_lens_fit(&LensFitInput::default(), &LensFitConfig::default()).unwrap()
    }

    #[test]
    fn summary_lines_in_order() {
        let text = format_summary(&reference_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "=== Linear fit: M = a * d_i + b ===",
                "a (slope) = -0.043792",
                "b (intercept) = 0.831803",
                "R² = 0.8704",
                "Experimental focal length f = 22.835 cm",
                "Experimental radius of curvature R = 45.670 cm",
            ]
        );
    }

    #[test]
    fn annotation_precision() {
        let lines = annotation_lines(&reference_report());
        assert_eq!(
            lines,
            [
                "a = -0.0438",
                "b = 0.8318",
                "R² = 0.8704",
                "f_exp = 22.84 cm",
                "R_exp = 45.67 cm",
            ]
        );
    }
}
