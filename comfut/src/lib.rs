//! # comfut
//!
//! A Rust library for pricing commodity forward and futures contracts.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `cf-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use comfut::pricers::{FuturesPricer, PricingMode};
//! use comfut::time::Date;
//!
//! let mut pricer = FuturesPricer::new();
//! pricer
//!     .set_forward_anchors(
//!         &[
//!             "2025-09-01".parse::<Date>().unwrap(),
//!             "2025-10-01".parse::<Date>().unwrap(),
//!             "2025-11-01".parse::<Date>().unwrap(),
//!         ],
//!         &[90.0, 85.0, 100.0],
//!     )
//!     .unwrap();
//! pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
//! pricer.set_delivery_date("2025-10-17".parse().unwrap());
//!
//! let price = pricer.price().unwrap();
//! assert!((price - (85.0 + 15.0 * 16.0 / 31.0)).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use cf_core as core;

/// Date, calendar, and day counter types.
pub use cf_time as time;

/// Interpolation utilities.
pub use cf_math as math;

/// Yield and forward-price term structures.
pub use cf_termstructures as termstructures;

/// Pricing engines and contract profiles.
pub use cf_pricers as pricers;
