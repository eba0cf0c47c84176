//! # cf-math
//!
//! Mathematical utilities for comfut-rs.  Currently this is the 1-D
//! interpolation layer shared by the zero-rate and forward-price curves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// 1-D interpolation trait and implementations.
pub mod interpolations;

pub use interpolations::{Interpolation1D, LinearInterpolation};
