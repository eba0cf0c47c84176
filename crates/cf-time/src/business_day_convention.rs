//! Business-day adjustment conventions.

/// How a date falling on a holiday is adjusted to a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Take the first business day after the given date.
    Following,
    /// Like `Following`, unless that day belongs to the next month, in which
    /// case the first business day before the given date is taken.
    ModifiedFollowing,
    /// Take the first business day before the given date.
    Preceding,
    /// Like `Preceding`, unless that day belongs to the previous month, in
    /// which case the first business day after the given date is taken.
    ModifiedPreceding,
    /// Leave the date unchanged.
    Unadjusted,
}
