//! `ForwardPriceCurve` — an observed forward curve for a commodity.
//!
//! The curve is a sequence of (date, price) anchors, typically quoted
//! forward or futures settlements, interpolated linearly in
//! date-serial-number space.  Serial numbers are exact integers, so no
//! floating-point date representation enters the weights.

use cf_core::errors::{Error, Result};
use cf_core::{Price, Real};
use cf_math::{Interpolation1D, LinearInterpolation};
use cf_time::Date;

/// A piecewise-linear forward-price curve defined by observed anchors.
///
/// Anchors are validated as a unit at construction: matching lengths, at
/// least two points, strictly increasing dates.  Queries strictly outside
/// `[first_date, last_date]` are coverage errors; the bounds themselves are
/// valid and return the anchor prices exactly.
#[derive(Debug, Clone)]
pub struct ForwardPriceCurve {
    dates: Vec<Date>,
    prices: Vec<Price>,
    interp: LinearInterpolation,
}

impl ForwardPriceCurve {
    /// Build a forward-price curve from anchor dates and prices.
    ///
    /// # Errors
    /// Returns a validation error on mismatched lengths, fewer than two
    /// anchors, or non-increasing dates.
    pub fn new(dates: &[Date], prices: &[Price]) -> Result<Self> {
        cf_core::validate!(
            dates.len() == prices.len(),
            "dates/prices size mismatch ({} vs {})",
            dates.len(),
            prices.len()
        );
        cf_core::validate!(dates.len() >= 2, "need at least 2 anchors");
        cf_core::validate!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "anchor dates must be strictly increasing"
        );

        let serials: Vec<Real> = dates.iter().map(|d| d.serial() as Real).collect();
        let interp = LinearInterpolation::new(&serials, prices)?;

        Ok(Self {
            dates: dates.to_vec(),
            prices: prices.to_vec(),
            interp,
        })
    }

    /// The first anchor date.
    pub fn first_date(&self) -> Date {
        self.dates[0]
    }

    /// The last anchor date.
    pub fn last_date(&self) -> Date {
        *self.dates.last().expect("at least 2 anchors by construction")
    }

    /// Return `true` if the anchors span the closed interval `[from, to]`.
    pub fn covers(&self, from: Date, to: Date) -> bool {
        from >= self.first_date() && to <= self.last_date()
    }

    /// Interpolated forward price on `date`.
    ///
    /// # Errors
    /// Returns a coverage error if `date` lies strictly before the first or
    /// strictly after the last anchor.
    pub fn price_on(&self, date: Date) -> Result<Price> {
        if !self.covers(date, date) {
            return Err(Error::Coverage(format!(
                "date {date} outside anchor range [{}, {}]",
                self.first_date(),
                self.last_date()
            )));
        }
        Ok(self.interp.value(date.serial() as Real))
    }

    /// Return the anchor dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return the anchor prices.
    pub fn prices(&self) -> &[Price] {
        &self.prices
    }
}
