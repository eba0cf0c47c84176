//! # cf-time
//!
//! Date, calendar, day counter, and interest-rate convention types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Compounding frequency.
pub mod frequency;

/// `InterestRate` — a rate bundled with its conventions.
pub mod interest_rate;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::Target;
pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, DayCounter};
pub use frequency::Frequency;
pub use interest_rate::InterestRate;
pub use weekday::Weekday;
