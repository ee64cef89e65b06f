mod line;
mod metrics;
pub mod polyfit;

pub use line::*;
pub use metrics::*;
pub use polyfit::{fit_polynomial, FitError};
