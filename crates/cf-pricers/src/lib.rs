//! # cf-pricers
//!
//! Commodity forward and futures pricing engines.
//!
//! [`FuturesPricer`] prices a forward/futures contract in one of two ways:
//!
//! * **cost of carry** — for storable commodities: spot price divided by a
//!   composite discount factor built from yield, cost-of-carry, and
//!   convenience-yield curves;
//! * **external forward anchor** — for non-storable commodities such as
//!   electricity: linear interpolation over an observed forward curve, with
//!   optional delivery-period averaging over calendar or business days.
//!
//! A [`ContractProfile`] restricts which combinations of pricing and
//! averaging modes a given contract type accepts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Contract profiles and the pricing/averaging mode enums.
pub mod contract_profile;

/// The futures pricing engine.
pub mod futures_pricer;

pub use contract_profile::{AveragingMode, ContractProfile, PricingMode};
pub use futures_pricer::FuturesPricer;
