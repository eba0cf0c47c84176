//! Pricing/averaging modes and the contract profiles that restrict them.

use cf_core::errors::{Error, Result};

/// How a forward price is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingMode {
    /// Spot price grown at the net financing/storage/convenience rate.
    /// Only meaningful for storable commodities.
    CostOfCarry,
    /// Interpolation of an externally observed forward curve.  Aimed at
    /// commodities like electricity, where no storable-spot relationship
    /// holds.
    ExternalForwardAnchor,
}

/// How the delivery period enters the price under
/// [`PricingMode::ExternalForwardAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AveragingMode {
    /// Price at the delivery date only.
    #[default]
    NoAverage,
    /// Time-weighted average over every calendar day of the delivery month.
    CalendarDay,
    /// Equal-weighted average over the business days of the delivery month.
    BusinessDay,
}

/// A contract type's legal combinations of pricing and averaging modes.
///
/// Profiles are static configuration: the table below is consulted on every
/// [`price`](crate::FuturesPricer::price) call, and a violated combination
/// fails with [`Error::ModeMismatch`] before any pricing work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractProfile {
    /// Any combination of modes is allowed.
    #[default]
    Unrestricted,
    /// A storable commodity (e.g. crude oil): cost-of-carry pricing at the
    /// delivery date, no averaging.
    StorableCommodity,
    /// A non-storable commodity settled over its delivery month (e.g.
    /// electricity): external forward anchors with calendar-day averaging.
    DeliveryAveraged,
}

impl ContractProfile {
    /// The single mode combination a restricted profile prescribes, or
    /// `None` for [`ContractProfile::Unrestricted`].
    pub fn fixed_modes(&self) -> Option<(PricingMode, AveragingMode)> {
        match self {
            ContractProfile::Unrestricted => None,
            ContractProfile::StorableCommodity => {
                Some((PricingMode::CostOfCarry, AveragingMode::NoAverage))
            }
            ContractProfile::DeliveryAveraged => Some((
                PricingMode::ExternalForwardAnchor,
                AveragingMode::CalendarDay,
            )),
        }
    }

    /// Return `true` if this profile accepts the given mode combination.
    pub fn allows(&self, pricing: PricingMode, averaging: AveragingMode) -> bool {
        match self.fixed_modes() {
            None => true,
            Some((p, a)) => pricing == p && averaging == a,
        }
    }

    pub(crate) fn ensure_allows(
        &self,
        pricing: PricingMode,
        averaging: AveragingMode,
    ) -> Result<()> {
        if self.allows(pricing, averaging) {
            Ok(())
        } else {
            Err(Error::ModeMismatch(format!(
                "{self:?} contract does not support {pricing:?} pricing with {averaging:?} averaging"
            )))
        }
    }
}
