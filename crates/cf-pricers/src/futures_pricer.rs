//! The commodity futures pricing engine.

use std::sync::Arc;

use cf_core::errors::{Error, Result};
use cf_core::{ensure, Compounding, Handle, Price, Rate, Real};
use cf_termstructures::{
    FlatForward, ForwardPriceCurve, TermStructure, YieldTermStructure, ZeroCurve,
};
use cf_time::{
    Actual365Fixed, BusinessDayConvention, Calendar, Date, DayCounter, Frequency, Target,
};

use crate::contract_profile::{AveragingMode, ContractProfile, PricingMode};

/// Which of the three discounting curves a setter targets.
#[derive(Debug, Clone, Copy)]
enum CurveRole {
    Yield,
    CostOfCarry,
    ConvenienceYield,
}

impl CurveRole {
    fn label(self) -> &'static str {
        match self {
            CurveRole::Yield => "yield curve",
            CurveRole::CostOfCarry => "cost-of-carry curve",
            CurveRole::ConvenienceYield => "convenience-yield curve",
        }
    }
}

/// Prices commodity forward/futures contracts.
///
/// The engine is constructed empty and configured through setters in any
/// order; [`price`](FuturesPricer::price) may then be called repeatedly with
/// different delivery dates or spots.  Configuring data never selects a
/// pricing mode: the mode is chosen explicitly with
/// [`set_pricing_mode`](FuturesPricer::set_pricing_mode), or implied once by
/// constructing the engine with a restricted [`ContractProfile`].
///
/// Under [`PricingMode::CostOfCarry`] the price is
/// `spot / (yield_df · carry_df / convenience_df)` at the delivery date;
/// under [`PricingMode::ExternalForwardAnchor`] it is the interpolated
/// forward price at the delivery date, or an average of interpolated prices
/// over the delivery month per the [`AveragingMode`].
#[derive(Debug)]
pub struct FuturesPricer {
    calendar: Box<dyn Calendar>,
    day_counter: Arc<dyn DayCounter>,
    profile: ContractProfile,
    evaluation_date: Option<Date>,
    delivery_date: Option<Date>,
    spot: Option<Real>,
    pricing_mode: Option<PricingMode>,
    averaging_mode: AveragingMode,
    yield_curve: Handle<dyn YieldTermStructure>,
    carry_curve: Handle<dyn YieldTermStructure>,
    convenience_curve: Handle<dyn YieldTermStructure>,
    forward_curve: Option<ForwardPriceCurve>,
}

impl FuturesPricer {
    /// Create an unrestricted pricer with the TARGET calendar and the
    /// Actual/365 (Fixed) day counter.
    pub fn new() -> Self {
        Self::with_profile(ContractProfile::Unrestricted)
    }

    /// Create a pricer for a given contract profile.
    ///
    /// A restricted profile selects its prescribed pricing and averaging
    /// modes up front; [`ContractProfile::Unrestricted`] leaves the pricing
    /// mode unset.
    pub fn with_profile(profile: ContractProfile) -> Self {
        let (pricing_mode, averaging_mode) = match profile.fixed_modes() {
            Some((p, a)) => (Some(p), a),
            None => (None, AveragingMode::NoAverage),
        };
        Self {
            calendar: Box::new(Target),
            day_counter: Arc::new(Actual365Fixed),
            profile,
            evaluation_date: None,
            delivery_date: None,
            spot: None,
            pricing_mode,
            averaging_mode,
            yield_curve: Handle::null(),
            carry_curve: Handle::null(),
            convenience_curve: Handle::null(),
            forward_curve: None,
        }
    }

    /// Replace the calendar used for business-day averaging.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Box::new(calendar);
        self
    }

    /// Replace the day counter used for year fractions and flat curves.
    pub fn with_day_counter(mut self, day_counter: impl DayCounter + 'static) -> Self {
        self.day_counter = Arc::new(day_counter);
        self
    }

    // ── Basic settings ───────────────────────────────────────────────────────

    /// Set the evaluation (as-of) date.  Flat curves configured afterwards
    /// are anchored at this date.
    pub fn set_evaluation_date(&mut self, date: Date) {
        self.evaluation_date = Some(date);
    }

    /// The evaluation date.
    ///
    /// # Errors
    /// Fails with a precondition error if the date was never set.
    pub fn evaluation_date(&self) -> Result<Date> {
        self.evaluation_date
            .ok_or_else(|| Error::Precondition("evaluation date is not yet set".into()))
    }

    /// Set the delivery date.  Under cost-of-carry pricing this is the
    /// settlement date; under anchor pricing with averaging it selects the
    /// delivery month.
    pub fn set_delivery_date(&mut self, date: Date) {
        self.delivery_date = Some(date);
    }

    /// The delivery date.
    ///
    /// # Errors
    /// Fails with a precondition error if the date was never set.
    pub fn delivery_date(&self) -> Result<Date> {
        self.delivery_date
            .ok_or_else(|| Error::Precondition("delivery date is not yet set".into()))
    }

    /// Set the spot price of the underlying at the evaluation date.
    pub fn set_spot(&mut self, spot: Real) {
        self.spot = Some(spot);
    }

    /// The spot price.
    ///
    /// # Errors
    /// Fails with a precondition error if the spot was never set.
    pub fn spot(&self) -> Result<Real> {
        self.spot
            .ok_or_else(|| Error::Precondition("spot is not yet set".into()))
    }

    /// Select the pricing mode.
    pub fn set_pricing_mode(&mut self, mode: PricingMode) {
        self.pricing_mode = Some(mode);
    }

    /// The selected pricing mode, if any.
    pub fn pricing_mode(&self) -> Option<PricingMode> {
        self.pricing_mode
    }

    /// Select the averaging mode.
    pub fn set_averaging_mode(&mut self, mode: AveragingMode) {
        self.averaging_mode = mode;
    }

    /// The selected averaging mode.
    pub fn averaging_mode(&self) -> AveragingMode {
        self.averaging_mode
    }

    /// The contract profile the pricer was constructed with.
    pub fn profile(&self) -> ContractProfile {
        self.profile
    }

    // ── Curves ───────────────────────────────────────────────────────────────

    /// Set the yield curve to a flat continuously-compounded rate anchored at
    /// the evaluation date.
    pub fn set_yield_curve_from_flat(&mut self, rate: Rate) -> Result<()> {
        self.set_curve_from_flat(CurveRole::Yield, rate)
    }

    /// Set the yield curve from (date, zero-rate) pillars.
    pub fn set_yield_curve_from_pillars(&mut self, dates: &[Date], rates: &[Rate]) -> Result<()> {
        self.set_curve_from_pillars(CurveRole::Yield, dates, rates)
    }

    /// Attach an externally constructed yield curve.
    pub fn set_yield_curve(&mut self, curve: Handle<dyn YieldTermStructure>) {
        self.yield_curve = curve;
    }

    /// Set the cost-of-carry curve to a flat continuously-compounded rate
    /// anchored at the evaluation date.
    pub fn set_carry_curve_from_flat(&mut self, rate: Rate) -> Result<()> {
        self.set_curve_from_flat(CurveRole::CostOfCarry, rate)
    }

    /// Set the cost-of-carry curve from (date, zero-rate) pillars.
    pub fn set_carry_curve_from_pillars(&mut self, dates: &[Date], rates: &[Rate]) -> Result<()> {
        self.set_curve_from_pillars(CurveRole::CostOfCarry, dates, rates)
    }

    /// Attach an externally constructed cost-of-carry curve.
    pub fn set_carry_curve(&mut self, curve: Handle<dyn YieldTermStructure>) {
        self.carry_curve = curve;
    }

    /// Set the convenience-yield curve to a flat continuously-compounded rate
    /// anchored at the evaluation date.
    pub fn set_convenience_yield_from_flat(&mut self, rate: Rate) -> Result<()> {
        self.set_curve_from_flat(CurveRole::ConvenienceYield, rate)
    }

    /// Set the convenience-yield curve from (date, zero-rate) pillars.
    pub fn set_convenience_yield_from_pillars(
        &mut self,
        dates: &[Date],
        rates: &[Rate],
    ) -> Result<()> {
        self.set_curve_from_pillars(CurveRole::ConvenienceYield, dates, rates)
    }

    /// Attach an externally constructed convenience-yield curve.
    pub fn set_convenience_yield(&mut self, curve: Handle<dyn YieldTermStructure>) {
        self.convenience_curve = curve;
    }

    fn set_curve_from_flat(&mut self, role: CurveRole, rate: Rate) -> Result<()> {
        let reference = self.evaluation_date()?;
        let curve = FlatForward::new(
            reference,
            rate,
            self.day_counter.clone(),
            Compounding::Continuous,
            Frequency::Annual,
        );
        *self.curve_slot(role) = Handle::from_arc(Arc::new(curve));
        Ok(())
    }

    fn set_curve_from_pillars(
        &mut self,
        role: CurveRole,
        dates: &[Date],
        rates: &[Rate],
    ) -> Result<()> {
        let curve = ZeroCurve::new(dates, rates, self.day_counter.clone())
            .map_err(|e| match e {
                Error::Validation(msg) => Error::Validation(format!("{}: {msg}", role.label())),
                other => other,
            })?
            .with_extrapolation();
        *self.curve_slot(role) = Handle::from_arc(Arc::new(curve));
        Ok(())
    }

    fn curve_slot(&mut self, role: CurveRole) -> &mut Handle<dyn YieldTermStructure> {
        match role {
            CurveRole::Yield => &mut self.yield_curve,
            CurveRole::CostOfCarry => &mut self.carry_curve,
            CurveRole::ConvenienceYield => &mut self.convenience_curve,
        }
    }

    // ── Forward anchors ──────────────────────────────────────────────────────

    /// Set the forward anchors for external-forward-anchor pricing.
    ///
    /// The anchors are validated as a unit before replacing any previous set;
    /// invalid input leaves the prior anchors untouched.
    pub fn set_forward_anchors(&mut self, dates: &[Date], prices: &[Price]) -> Result<()> {
        let curve = ForwardPriceCurve::new(dates, prices)?;
        self.forward_curve = Some(curve);
        Ok(())
    }

    /// Attach an already-built forward-price curve.
    pub fn set_forward_curve(&mut self, curve: ForwardPriceCurve) {
        self.forward_curve = Some(curve);
    }

    /// Remove any configured forward anchors.
    pub fn clear_forward_anchors(&mut self) {
        self.forward_curve = None;
    }

    /// The configured forward-price curve, if any.
    pub fn forward_curve(&self) -> Option<&ForwardPriceCurve> {
        self.forward_curve.as_ref()
    }

    // ── Discounting ──────────────────────────────────────────────────────────

    /// Composite discount factor on `date`:
    /// `yield_df · carry_df / convenience_df`.
    ///
    /// # Errors
    /// Fails with a coverage error if any of the three curves is missing,
    /// has a reference date after `date`, or ends before `date` without
    /// extrapolation permission.  All three curves are checked before any
    /// discounting.
    pub fn discount_factor_on(&self, date: Date) -> Result<Real> {
        let yld = Self::checked_curve(&self.yield_curve, CurveRole::Yield, date)?;
        let carry = Self::checked_curve(&self.carry_curve, CurveRole::CostOfCarry, date)?;
        let convenience =
            Self::checked_curve(&self.convenience_curve, CurveRole::ConvenienceYield, date)?;
        Ok(yld.discount_date(date) * carry.discount_date(date) / convenience.discount_date(date))
    }

    /// Composite discount factor at the delivery date.
    pub fn discount_factor(&self) -> Result<Real> {
        self.discount_factor_on(self.delivery_date()?)
    }

    fn checked_curve<'a>(
        handle: &'a Handle<dyn YieldTermStructure>,
        role: CurveRole,
        date: Date,
    ) -> Result<&'a dyn YieldTermStructure> {
        let curve = handle
            .get()
            .ok_or_else(|| Error::Coverage(format!("{} is not configured", role.label())))?;
        if date < curve.reference_date() {
            return Err(Error::Coverage(format!(
                "date {date} precedes the {} reference date {}",
                role.label(),
                curve.reference_date()
            )));
        }
        if date > curve.max_date() && !curve.allows_extrapolation() {
            return Err(Error::Coverage(format!(
                "date {date} beyond the {} max date {} and extrapolation is not allowed",
                role.label(),
                curve.max_date()
            )));
        }
        Ok(curve)
    }

    // ── Forward-anchor pricing ───────────────────────────────────────────────

    /// Interpolated forward price on `date`.
    ///
    /// # Errors
    /// Fails with a precondition error if no anchors are set, or a coverage
    /// error if `date` lies outside the anchor range.
    pub fn forward_price_on(&self, date: Date) -> Result<Price> {
        self.anchors()?.price_on(date)
    }

    fn anchors(&self) -> Result<&ForwardPriceCurve> {
        self.forward_curve
            .as_ref()
            .ok_or_else(|| Error::Precondition("forward anchors are not yet set".into()))
    }

    /// Time-weighted average forward price over the delivery month.
    ///
    /// Trapezoidal integral of the interpolated forward curve between the
    /// first and last calendar day of the month, with breakpoints at every
    /// interior anchor, normalized by the month's year fraction.
    fn delivery_average_calendar(&self) -> Result<Price> {
        let curve = self.anchors()?;
        let delivery = self.delivery_date()?;
        let start = delivery.start_of_month();
        let end = delivery.end_of_month();
        if !curve.covers(start, end) {
            return Err(Error::Coverage(format!(
                "delivery month [{start}, {end}] not covered by anchor range [{}, {}]",
                curve.first_date(),
                curve.last_date()
            )));
        }

        let mut breakpoints = vec![start];
        for &d in curve.dates() {
            if start < d && d < end {
                breakpoints.push(d);
            }
        }
        breakpoints.push(end);

        let mut numerator = 0.0;
        let denominator = self.day_counter.year_fraction(start, end);
        for pair in breakpoints.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let pa = curve.price_on(a)?;
            let pb = curve.price_on(b)?;
            numerator += 0.5 * (pa + pb) * self.day_counter.year_fraction(a, b);
        }
        Ok(numerator / denominator)
    }

    /// Simple average of the interpolated forward price over every business
    /// day of the delivery month.
    fn delivery_average_business(&self) -> Result<Price> {
        let curve = self.anchors()?;
        let delivery = self.delivery_date()?;
        let mut start = delivery.start_of_month();
        if !self.calendar.is_business_day(start) {
            start = self.calendar.adjust(start, BusinessDayConvention::Following);
        }
        let end = self.calendar.end_of_month(start);
        if !curve.covers(start, end) {
            return Err(Error::Coverage(format!(
                "delivery window [{start}, {end}] not covered by anchor range [{}, {}]",
                curve.first_date(),
                curve.last_date()
            )));
        }

        let mut numerator = 0.0;
        let mut count = 0u32;
        let mut d = start;
        while d <= end {
            if self.calendar.is_business_day(d) {
                numerator += curve.price_on(d)?;
                count += 1;
            }
            d = d + 1;
        }
        if count == 0 {
            return Err(Error::NoBusinessDay(format!(
                "no business day in delivery window [{start}, {end}]"
            )));
        }
        Ok(numerator / count as Real)
    }

    // ── Pricing ──────────────────────────────────────────────────────────────

    /// Price the contract under the configured modes.
    ///
    /// # Errors
    /// Fails with a precondition error if the delivery date or pricing mode
    /// is unset (or, under cost of carry, the spot), a mode-mismatch error if
    /// the contract profile rejects the mode combination, and coverage errors
    /// per the active mode's curve requirements.
    pub fn price(&self) -> Result<Price> {
        let delivery = self.delivery_date()?;
        let mode = self
            .pricing_mode
            .ok_or_else(|| Error::Precondition("pricing mode is not yet set".into()))?;
        self.profile.ensure_allows(mode, self.averaging_mode)?;

        match mode {
            PricingMode::CostOfCarry => {
                let spot = self.spot()?;
                ensure!(spot > 0.0, "spot must be positive, got {spot}");
                Ok(spot / self.discount_factor()?)
            }
            PricingMode::ExternalForwardAnchor => match self.averaging_mode {
                AveragingMode::NoAverage => self.forward_price_on(delivery),
                AveragingMode::CalendarDay => self.delivery_average_calendar(),
                AveragingMode::BusinessDay => self.delivery_average_business(),
            },
        }
    }
}

impl Default for FuturesPricer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cf_time::WeekendsOnly;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn anchor_pricer() -> FuturesPricer {
        let mut pricer = FuturesPricer::new();
        pricer
            .set_forward_anchors(
                &[date(2025, 9, 1), date(2025, 10, 1), date(2025, 11, 1)],
                &[90.0, 85.0, 100.0],
            )
            .unwrap();
        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        pricer.set_delivery_date(date(2025, 10, 17));
        pricer
    }

    #[test]
    fn accessors_fail_before_configuration() {
        let pricer = FuturesPricer::new();
        assert!(matches!(pricer.spot(), Err(Error::Precondition(_))));
        assert!(matches!(
            pricer.evaluation_date(),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(pricer.delivery_date(), Err(Error::Precondition(_))));
        assert!(matches!(pricer.price(), Err(Error::Precondition(_))));
    }

    #[test]
    fn price_requires_explicit_pricing_mode() {
        let mut pricer = FuturesPricer::new();
        pricer.set_delivery_date(date(2025, 10, 17));
        pricer
            .set_forward_anchors(
                &[date(2025, 9, 1), date(2025, 11, 1)],
                &[90.0, 100.0],
            )
            .unwrap();
        // Configuring data selects no mode
        assert!(pricer.pricing_mode().is_none());
        assert!(matches!(pricer.price(), Err(Error::Precondition(_))));

        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        assert!(pricer.price().is_ok());
    }

    #[test]
    fn interpolates_at_delivery_date() {
        let pricer = anchor_pricer();
        let expected = 85.0 + 15.0 * 16.0 / 31.0;
        assert_abs_diff_eq!(pricer.price().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn calendar_average_over_october() {
        let mut pricer = anchor_pricer();
        pricer.set_averaging_mode(AveragingMode::CalendarDay);
        // No anchors inside October: single trapezoid from Oct 1 to Oct 31
        let expected = 0.5 * (85.0 + (85.0 + 15.0 * 30.0 / 31.0));
        assert_abs_diff_eq!(pricer.price().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn calendar_average_ignores_exact_delivery_day() {
        let mut pricer = anchor_pricer();
        pricer.set_averaging_mode(AveragingMode::CalendarDay);
        let p1 = pricer.price().unwrap();
        pricer.set_delivery_date(date(2025, 10, 3));
        let p2 = pricer.price().unwrap();
        assert_abs_diff_eq!(p1, p2, epsilon = 1e-15);
    }

    #[test]
    fn calendar_average_splits_at_interior_anchors() {
        let mut pricer = FuturesPricer::new();
        // Kink at Oct 16: flat 100 then linear down to 70
        pricer
            .set_forward_anchors(
                &[date(2025, 10, 1), date(2025, 10, 16), date(2025, 10, 31)],
                &[100.0, 100.0, 70.0],
            )
            .unwrap();
        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        pricer.set_averaging_mode(AveragingMode::CalendarDay);
        pricer.set_delivery_date(date(2025, 10, 17));

        // Trapezoids: [1,16] at 100, [16,31] from 100 to 70
        let expected = (100.0 * 15.0 + 85.0 * 15.0) / 30.0;
        assert_abs_diff_eq!(pricer.price().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn calendar_average_of_flat_curve_is_the_flat_price() {
        let mut pricer = FuturesPricer::new();
        pricer
            .set_forward_anchors(
                &[date(2025, 9, 15), date(2025, 10, 10), date(2025, 11, 15)],
                &[80.0, 80.0, 80.0],
            )
            .unwrap();
        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        pricer.set_averaging_mode(AveragingMode::CalendarDay);
        pricer.set_delivery_date(date(2025, 10, 17));
        assert_abs_diff_eq!(pricer.price().unwrap(), 80.0, epsilon = 1e-12);
    }

    #[test]
    fn averaging_mode_is_ignored_under_cost_of_carry() {
        let mut pricer = FuturesPricer::new();
        pricer.set_spot(90.0);
        pricer.set_evaluation_date(date(2025, 7, 1));
        pricer.set_delivery_date(date(2025, 10, 17));
        pricer.set_pricing_mode(PricingMode::CostOfCarry);
        pricer.set_yield_curve_from_flat(0.02).unwrap();
        pricer.set_carry_curve_from_flat(0.003).unwrap();
        pricer.set_convenience_yield_from_flat(0.005).unwrap();

        let plain = pricer.price().unwrap();
        pricer.set_averaging_mode(AveragingMode::CalendarDay);
        assert_abs_diff_eq!(pricer.price().unwrap(), plain, epsilon = 1e-15);
    }

    #[test]
    fn business_average_of_constant_curve_is_constant() {
        let mut pricer = FuturesPricer::new();
        pricer
            .set_forward_anchors(&[date(2025, 9, 15), date(2025, 11, 15)], &[80.0, 80.0])
            .unwrap();
        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        pricer.set_averaging_mode(AveragingMode::BusinessDay);
        pricer.set_delivery_date(date(2025, 10, 17));
        assert_abs_diff_eq!(pricer.price().unwrap(), 80.0, epsilon = 1e-12);
    }

    #[test]
    fn business_average_weights_days_equally() {
        let mut pricer = FuturesPricer::new().with_calendar(WeekendsOnly);
        // Linear from 60 at Oct 1 to 90 at Oct 31
        pricer
            .set_forward_anchors(&[date(2025, 10, 1), date(2025, 10, 31)], &[60.0, 90.0])
            .unwrap();
        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        pricer.set_averaging_mode(AveragingMode::BusinessDay);
        pricer.set_delivery_date(date(2025, 10, 6));

        // Business days of October 2025 under a weekends-only calendar
        let cal = WeekendsOnly;
        let mut sum = 0.0;
        let mut n = 0.0;
        let mut d = date(2025, 10, 1);
        while d <= date(2025, 10, 31) {
            if cal.is_business_day(d) {
                sum += 60.0 + 30.0 * ((d - date(2025, 10, 1)) as f64) / 30.0;
                n += 1.0;
            }
            d = d + 1;
        }
        assert_abs_diff_eq!(pricer.price().unwrap(), sum / n, epsilon = 1e-12);
    }

    #[test]
    fn averaging_requires_month_coverage() {
        let mut pricer = anchor_pricer();
        pricer.set_averaging_mode(AveragingMode::CalendarDay);
        // Delivery month November: anchors end Nov 1
        pricer.set_delivery_date(date(2025, 11, 10));
        assert!(matches!(pricer.price(), Err(Error::Coverage(_))));
    }

    #[test]
    fn cost_of_carry_requires_positive_spot() {
        let mut pricer = FuturesPricer::new();
        pricer.set_evaluation_date(date(2025, 7, 1));
        pricer.set_delivery_date(date(2025, 10, 17));
        pricer.set_pricing_mode(PricingMode::CostOfCarry);
        pricer.set_yield_curve_from_flat(0.02).unwrap();
        pricer.set_carry_curve_from_flat(0.003).unwrap();
        pricer.set_convenience_yield_from_flat(0.005).unwrap();

        assert!(matches!(pricer.price(), Err(Error::Precondition(_))));
        pricer.set_spot(-1.0);
        assert!(matches!(pricer.price(), Err(Error::Precondition(_))));
        pricer.set_spot(90.0);
        assert!(pricer.price().is_ok());
    }

    #[test]
    fn flat_curve_setters_require_evaluation_date() {
        let mut pricer = FuturesPricer::new();
        assert!(matches!(
            pricer.set_yield_curve_from_flat(0.02),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn composite_discount_factor_combines_three_curves() {
        let mut pricer = FuturesPricer::new();
        pricer.set_evaluation_date(date(2025, 7, 1));
        pricer.set_yield_curve_from_flat(0.02).unwrap();
        pricer.set_carry_curve_from_flat(0.003).unwrap();
        pricer.set_convenience_yield_from_flat(0.005).unwrap();

        let d = date(2026, 7, 1);
        let t: f64 = 365.0 / 365.0;
        let expected = (-(0.02 + 0.003 - 0.005) * t).exp();
        assert_abs_diff_eq!(pricer.discount_factor_on(d).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn discounting_fails_without_all_three_curves() {
        let mut pricer = FuturesPricer::new();
        pricer.set_evaluation_date(date(2025, 7, 1));
        pricer.set_yield_curve_from_flat(0.02).unwrap();
        pricer.set_carry_curve_from_flat(0.003).unwrap();
        // convenience-yield curve missing
        assert!(matches!(
            pricer.discount_factor_on(date(2025, 10, 17)),
            Err(Error::Coverage(_))
        ));
    }

    #[test]
    fn discounting_fails_before_curve_reference_date() {
        let mut pricer = FuturesPricer::new();
        pricer.set_evaluation_date(date(2025, 7, 1));
        pricer.set_yield_curve_from_flat(0.02).unwrap();
        pricer.set_carry_curve_from_flat(0.003).unwrap();
        pricer
            .set_convenience_yield_from_pillars(
                &[date(2025, 8, 12), date(2026, 1, 1)],
                &[0.005, 0.007],
            )
            .unwrap();
        // 2025-08-01 precedes the convenience-yield reference date
        assert!(matches!(
            pricer.discount_factor_on(date(2025, 8, 1)),
            Err(Error::Coverage(_))
        ));
    }

    #[test]
    fn pillar_curves_extrapolate_beyond_last_date() {
        let mut pricer = FuturesPricer::new();
        pricer.set_evaluation_date(date(2025, 7, 1));
        pricer
            .set_yield_curve_from_pillars(
                &[date(2025, 7, 1), date(2025, 8, 1)],
                &[0.02, 0.021],
            )
            .unwrap();
        pricer.set_carry_curve_from_flat(0.003).unwrap();
        pricer.set_convenience_yield_from_flat(0.005).unwrap();
        // Well past the yield curve's last pillar
        assert!(pricer.discount_factor_on(date(2026, 7, 1)).is_ok());
    }

    #[test]
    fn external_curve_shared_between_pricers() {
        let curve: Arc<dyn YieldTermStructure> = Arc::new(FlatForward::continuous(
            date(2025, 7, 1),
            0.02,
            Actual365Fixed,
        ));
        let handle = Handle::from_arc(curve);

        let mut a = FuturesPricer::new();
        let mut b = FuturesPricer::new();
        for pricer in [&mut a, &mut b] {
            pricer.set_evaluation_date(date(2025, 7, 1));
            pricer.set_yield_curve(handle.clone());
            pricer.set_carry_curve_from_flat(0.0).unwrap();
            pricer.set_convenience_yield_from_flat(0.0).unwrap();
        }
        let d = date(2025, 10, 17);
        assert_abs_diff_eq!(
            a.discount_factor_on(d).unwrap(),
            b.discount_factor_on(d).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn invalid_anchor_input_preserves_previous_anchors() {
        let mut pricer = anchor_pricer();
        let before = pricer.forward_curve().unwrap().prices().to_vec();
        let err = pricer
            .set_forward_anchors(&[date(2025, 9, 1)], &[90.0])
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(pricer.forward_curve().unwrap().prices(), before.as_slice());
    }

    #[test]
    fn restricted_profiles_preselect_modes() {
        let pricer = FuturesPricer::with_profile(ContractProfile::StorableCommodity);
        assert_eq!(pricer.pricing_mode(), Some(PricingMode::CostOfCarry));
        assert_eq!(pricer.averaging_mode(), AveragingMode::NoAverage);

        let pricer = FuturesPricer::with_profile(ContractProfile::DeliveryAveraged);
        assert_eq!(
            pricer.pricing_mode(),
            Some(PricingMode::ExternalForwardAnchor)
        );
        assert_eq!(pricer.averaging_mode(), AveragingMode::CalendarDay);
    }

    #[test]
    fn profile_rejects_foreign_modes() {
        let mut pricer = FuturesPricer::with_profile(ContractProfile::StorableCommodity);
        pricer.set_delivery_date(date(2025, 10, 17));
        pricer
            .set_forward_anchors(
                &[date(2025, 9, 1), date(2025, 11, 1)],
                &[90.0, 100.0],
            )
            .unwrap();
        pricer.set_pricing_mode(PricingMode::ExternalForwardAnchor);
        assert!(matches!(pricer.price(), Err(Error::ModeMismatch(_))));
    }
}
