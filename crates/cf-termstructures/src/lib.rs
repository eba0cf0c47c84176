//! # cf-termstructures
//!
//! Yield and forward-price term structures for comfut-rs.
//!
//! Yield curves produce discount factors for dates at or after their
//! reference date; the forward-price curve interpolates externally observed
//! forward quotes.  Both are consumed by the pricers in `cf-pricers`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `TermStructure` — base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure` — yield / discounting term structures.
pub mod yield_term_structure;

/// `FlatForward` — constant-rate yield curve.
pub mod flat_forward;

/// `ZeroCurve` — piecewise-linear zero-rate curve.
pub mod zero_curve;

/// `ForwardPriceCurve` — observed forward-price anchors.
pub mod forward_price_curve;

pub use flat_forward::FlatForward;
pub use forward_price_curve::ForwardPriceCurve;
pub use term_structure::TermStructure;
pub use yield_term_structure::{YieldTermStructure, YieldTermStructureData};
pub use zero_curve::ZeroCurve;
