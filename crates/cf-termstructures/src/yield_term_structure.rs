//! `YieldTermStructure` — yield / discounting term structures.
//!
//! A yield term structure provides **discount factors** `P(0, t)` and
//! continuously-compounded **zero rates** `z(t)`.  The two are linked by
//! `P(t) = exp(-z(t)·t)`.

use crate::term_structure::TermStructure;
use cf_core::{DiscountFactor, Rate, Time};
use cf_time::{Calendar, Date, DayCounter};
use std::sync::Arc;

/// A yield (interest-rate) term structure.
///
/// Implementors provide [`zero_rate_impl`](YieldTermStructure::zero_rate_impl);
/// the discount factor follows from the continuous-compounding relationship
/// and may be overridden where a more direct computation exists.
pub trait YieldTermStructure: TermStructure {
    /// Return the continuously-compounded zero rate for time `t`.
    fn zero_rate_impl(&self, t: Time) -> Rate;

    /// Return the discount factor for time `t`.
    ///
    /// Default: `exp(-z(t)·t)`, with `P(0) = 1`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        let z = self.zero_rate_impl(t);
        (-z * t).exp()
    }

    /// Discount factor for a time (in years from the reference date).
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount_impl(self.time_from_reference(date))
    }
}

/// Common data shared by the yield-curve implementations.
#[derive(Debug)]
pub struct YieldTermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Calendar for date adjustments.
    pub calendar: Box<dyn Calendar>,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl YieldTermStructureData {
    /// Create a new data bundle.
    pub fn new(
        reference_date: Date,
        calendar: impl Calendar + 'static,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            reference_date,
            calendar: Box::new(calendar),
            day_counter: Arc::new(day_counter),
        }
    }
}
