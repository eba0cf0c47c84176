//! `FlatForward` — a yield term structure with a constant forward rate.
//!
//! The simplest possible yield curve: a constant continuously-compounded rate
//! that applies for all maturities.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::{YieldTermStructure, YieldTermStructureData};
use cf_core::{Compounding, Rate, Time};
use cf_time::{Calendar, Date, DayCounter, Frequency, InterestRate, NullCalendar};
use std::sync::Arc;

/// A flat (constant) forward-rate yield term structure.
///
/// Discount factors are computed as `P(t) = exp(-r·t)` where `r` is the
/// continuously-compounded equivalent of the supplied rate.
#[derive(Debug)]
pub struct FlatForward {
    data: YieldTermStructureData,
    /// The continuously-compounded flat rate.
    rate: Rate,
}

impl FlatForward {
    /// Create a flat-forward curve from a given rate and compounding
    /// convention.  The rate is immediately converted to the equivalent
    /// continuous rate.
    pub fn new(
        reference_date: Date,
        rate: Rate,
        day_counter: impl DayCounter + 'static,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Self {
        let continuous_rate =
            InterestRate::new(rate, compounding, frequency).continuous_equivalent();
        Self {
            data: YieldTermStructureData {
                reference_date,
                calendar: Box::new(NullCalendar),
                day_counter: Arc::new(day_counter),
            },
            rate: continuous_rate,
        }
    }

    /// Create a flat-forward curve assuming continuous compounding.
    pub fn continuous(
        reference_date: Date,
        rate: Rate,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self::new(
            reference_date,
            rate,
            day_counter,
            Compounding::Continuous,
            Frequency::NoFrequency,
        )
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.data.calendar = Box::new(calendar);
        self
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn calendar(&self) -> &dyn Calendar {
        &*self.data.calendar
    }

    fn max_date(&self) -> Date {
        Date::MAX
    }
}

impl YieldTermStructure for FlatForward {
    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }

    fn discount_impl(&self, t: Time) -> f64 {
        (-self.rate * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cf_time::Actual365Fixed;

    #[test]
    fn discount_matches_exponential() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let curve = FlatForward::continuous(ref_date, 0.05, Actual365Fixed);

        assert_abs_diff_eq!(curve.discount(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount(1.0), (-0.05_f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(curve.discount(10.0), (-0.5_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn discount_date_uses_day_counter() {
        let ref_date = Date::from_ymd(2025, 7, 1).unwrap();
        let curve = FlatForward::continuous(ref_date, 0.003, Actual365Fixed);

        let d = Date::from_ymd(2025, 10, 17).unwrap();
        let t: f64 = 108.0 / 365.0;
        assert_abs_diff_eq!(curve.discount_date(d), (-0.003 * t).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount_date(ref_date), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn annual_compounding_converts_to_continuous() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let curve = FlatForward::new(
            ref_date,
            0.05,
            Actual365Fixed,
            Compounding::Compounded,
            Frequency::Annual,
        );
        // Annual 5% → continuous = ln(1.05)
        assert_abs_diff_eq!(curve.rate(), (1.05_f64).ln(), epsilon = 1e-12);
    }

    #[test]
    fn unbounded_max_date() {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        let curve = FlatForward::continuous(ref_date, 0.05, Actual365Fixed);
        assert_eq!(curve.max_date(), Date::MAX);
        assert!(!curve.allows_extrapolation());
    }
}
