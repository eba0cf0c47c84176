//! `TermStructure` — base trait for all term structures.
//!
//! Every term structure has a **reference date**, a **day counter**, a
//! **maximum date**, and an extrapolation permission flag consulted by
//! callers before asking for values beyond the maximum date.

use cf_core::Time;
use cf_time::{Calendar, Date, DayCounter};

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1.0 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time-fraction conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The calendar used for date adjustments.
    fn calendar(&self) -> &dyn Calendar;

    /// The latest date for which the curve holds data.
    fn max_date(&self) -> Date;

    /// Whether the curve may be queried beyond [`max_date`](Self::max_date).
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter()
            .year_fraction(self.reference_date(), date)
    }
}
