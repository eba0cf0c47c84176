//! `ZeroCurve` — a yield term structure built from zero rates at known dates.
//!
//! The curve stores (date, zero-rate) pillars and interpolates zero rates
//! linearly as a function of time.  Discount factors are computed as
//! `P(t) = exp(-z(t)·t)`.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::{YieldTermStructure, YieldTermStructureData};
use cf_core::{errors::Result, Rate, Real, Time};
use cf_math::{Interpolation1D, LinearInterpolation};
use cf_time::{Calendar, Date, DayCounter, NullCalendar};
use std::sync::Arc;

/// A yield curve defined by continuously-compounded zero rates at known
/// dates, interpolated linearly in year-fraction space.
///
/// The first pillar date is the curve's reference date.  Beyond the last
/// pillar the rate extends along the final segment, but only callers that
/// find [`allows_extrapolation`](TermStructure::allows_extrapolation) set
/// should rely on that.
#[derive(Debug)]
pub struct ZeroCurve {
    data: YieldTermStructureData,
    /// Pillar dates (first entry = reference date).
    dates: Vec<Date>,
    /// Year fractions corresponding to `dates`.
    times: Vec<Real>,
    /// Zero rates at `dates`.
    rates: Vec<Rate>,
    interp: LinearInterpolation,
    extrapolate: bool,
}

impl ZeroCurve {
    /// Build a zero-rate curve from dates and corresponding zero rates.
    ///
    /// # Arguments
    /// * `dates` — pillar dates, strictly increasing (first = reference date)
    /// * `rates` — continuously-compounded zero rates at each date
    /// * `day_counter` — used for date → time conversion
    ///
    /// # Errors
    /// Returns a validation error on mismatched lengths, fewer than two
    /// pillars, or non-increasing dates.
    pub fn new(dates: &[Date], rates: &[Rate], day_counter: impl DayCounter + 'static) -> Result<Self> {
        cf_core::validate!(
            dates.len() == rates.len(),
            "dates/rates size mismatch ({} vs {})",
            dates.len(),
            rates.len()
        );
        cf_core::validate!(dates.len() >= 2, "need at least 2 pillars");
        cf_core::validate!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "pillar dates must be strictly increasing"
        );

        let reference_date = dates[0];
        let dc: Arc<dyn DayCounter> = Arc::new(day_counter);
        let times: Vec<Real> = dates
            .iter()
            .map(|&d| dc.year_fraction(reference_date, d))
            .collect();
        let interp = LinearInterpolation::new(&times, rates)?;

        Ok(Self {
            data: YieldTermStructureData {
                reference_date,
                calendar: Box::new(NullCalendar),
                day_counter: dc,
            },
            dates: dates.to_vec(),
            times,
            rates: rates.to_vec(),
            interp,
            extrapolate: false,
        })
    }

    /// Permit queries beyond the last pillar date.
    pub fn with_extrapolation(mut self) -> Self {
        self.extrapolate = true;
        self
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.data.calendar = Box::new(calendar);
        self
    }

    /// Return the pillar dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return the pillar times.
    pub fn times(&self) -> &[Real] {
        &self.times
    }

    /// Return the pillar zero rates.
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }
}

impl TermStructure for ZeroCurve {
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
        *self.dates.last().expect("at least 2 pillars by construction")
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }
}

impl YieldTermStructure for ZeroCurve {
    fn zero_rate_impl(&self, t: Time) -> Rate {
        self.interp.value(t)
    }
}
