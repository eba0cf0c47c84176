//! `InterestRate` — a rate bundled with its compounding conventions.
//!
//! Used to convert between quoting conventions, e.g. an annually-compounded
//! rate into its continuously-compounded equivalent.

use crate::frequency::Frequency;
use cf_core::{Compounding, Real, Time};

/// An interest rate with associated compounding convention and frequency.
#[derive(Debug, Clone, Copy)]
pub struct InterestRate {
    rate: Real,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Create a new interest rate.
    ///
    /// # Arguments
    /// * `rate` — the annual rate as a decimal (e.g. 0.05 = 5 %)
    /// * `compounding` — compounding convention
    /// * `frequency` — compounding frequency (ignored for Simple and
    ///   Continuous)
    pub fn new(rate: Real, compounding: Compounding, frequency: Frequency) -> Self {
        Self {
            rate,
            compounding,
            frequency,
        }
    }

    /// The rate value.
    pub fn rate(&self) -> Real {
        self.rate
    }

    /// The compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The compounding frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Compound factor over a period of `t` years: the ratio of the notional
    /// value at `t` to the notional at 0.
    ///
    /// # Panics
    /// Panics if `t < 0`, or on `Compounded` with `NoFrequency`.
    pub fn compound_factor_time(&self, t: Time) -> Real {
        assert!(t >= 0.0, "negative time ({t}) not allowed");
        if t == 0.0 {
            return 1.0;
        }
        match self.compounding {
            Compounding::Simple => 1.0 + self.rate * t,
            Compounding::Compounded => {
                let freq = self
                    .frequency
                    .periods_per_year()
                    .expect("compounded rate needs a frequency") as Real;
                (1.0 + self.rate / freq).powf(freq * t)
            }
            Compounding::Continuous => (self.rate * t).exp(),
        }
    }

    /// The continuously-compounded rate producing the same compound factor
    /// over one year.
    pub fn continuous_equivalent(&self) -> Real {
        match self.compounding {
            Compounding::Continuous => self.rate,
            _ => self.compound_factor_time(1.0).ln(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn continuous_compound_factor() {
        let r = InterestRate::new(0.05, Compounding::Continuous, Frequency::NoFrequency);
        assert_abs_diff_eq!(r.compound_factor_time(2.0), (0.1_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(r.continuous_equivalent(), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn annual_to_continuous() {
        let r = InterestRate::new(0.05, Compounding::Compounded, Frequency::Annual);
        assert_abs_diff_eq!(r.compound_factor_time(1.0), 1.05, epsilon = 1e-15);
        assert_abs_diff_eq!(r.continuous_equivalent(), (1.05_f64).ln(), epsilon = 1e-15);
    }

    #[test]
    fn simple_rate() {
        let r = InterestRate::new(0.04, Compounding::Simple, Frequency::NoFrequency);
        assert_abs_diff_eq!(r.compound_factor_time(0.5), 1.02, epsilon = 1e-15);
    }

    #[test]
    fn semiannual_compounding() {
        let r = InterestRate::new(0.06, Compounding::Compounded, Frequency::Semiannual);
        assert_abs_diff_eq!(r.compound_factor_time(1.0), 1.03_f64.powi(2), epsilon = 1e-15);
    }
}
