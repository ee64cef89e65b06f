//! Core types and closed-form relations for `lensfit`.
//!
//! This crate contains:
//! - the scalar alias and small numeric helpers (`Real`, [`linspace`], [`mean`]),
//! - the optical-bench measurement set and its signed magnification series,
//! - thin-lens relations from a magnification slope ([`OpticalParameters`]),
//! - the theoretical comparison model drawn next to the fit ([`TheoreticalModel`]),
//! - the reference bench dataset ([`dataset::reference_bench`]).
//!
//! Data flow (conceptually):
//! `(d_i, h_i), h_o -> M = -h_i / h_o -> fit M = a*d_i + b -> f = -1/a, R = 2f`
//!
//! The fit itself lives in `lensfit-linear`.

/// Reference bench dataset.
pub mod dataset;
/// Scalar alias and numeric helpers.
mod math;
/// Measurement set and signed magnification.
mod measurement;
/// Thin-lens relations derived from the fit slope.
mod optics;
/// Theoretical comparison model.
mod theory;

pub use math::*;
pub use measurement::*;
pub use optics::*;
pub use theory::*;
