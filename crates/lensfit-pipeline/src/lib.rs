//! Magnification-fit pipeline.
//!
//! Ties the measurement types, the least-squares fit and the plot together:
//!
//! ```no_run
//! use lensfit_pipeline::{format_summary, run_lens_fit, LensFitConfig, LensFitInput};
//!
//! let report = run_lens_fit(&LensFitInput::default(), &LensFitConfig::default()).unwrap();
//! println!("{}", format_summary(&report));
//! ```

mod plot;
mod run;
mod summary;
mod types;

pub use plot::{build_figure, render_report_plot, write_report_plot};
pub use run::run_lens_fit;
pub use summary::{annotation_lines, format_summary};
pub use types::{LensFitConfig, LensFitInput, LensFitReport, TheoryConfig};
