//! Decimal rounding helpers.
//!
//! Results in this crate are reported rounded half-away-from-zero, so
//! `2.5` becomes `3.0` and `-2.5` becomes `-3.0`. Half-to-even rounding is
//! available for reproducing figures computed with banker's rounding.

/// The tie-breaking policy used when a value lies exactly halfway between two
/// representable results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Ties round away from zero (`0.5 -> 1`, `-0.5 -> -1`).
    #[default]
    HalfAwayFromZero,
    /// Ties round to the nearest even digit (`0.5 -> 0`, `1.5 -> 2`).
    HalfToEven,
}

/// Rounds `value` to `digits` decimal places, half-away-from-zero.
///
/// # Examples
///
/// ```
/// use descstat::rounding::round;
///
/// assert_eq!(round(25.428_571, 1), 25.4);
/// assert_eq!(round(2464.5, 0), 2465.0);
/// assert_eq!(round(1.0 / 30.0, 3), 0.033);
/// ```
#[must_use]
pub fn round(value: f64, digits: u32) -> f64 {
    round_with(value, digits, RoundingMode::HalfAwayFromZero)
}

/// Rounds `value` to `digits` decimal places using the given tie policy.
///
/// Values too large to scale (the scaled value is not finite) and non-finite
/// inputs are returned unchanged.
///
/// # Examples
///
/// ```
/// use descstat::rounding::{RoundingMode, round_with};
///
/// assert_eq!(round_with(2464.5, 0, RoundingMode::HalfToEven), 2464.0);
/// assert_eq!(round_with(2465.5, 0, RoundingMode::HalfToEven), 2466.0);
/// ```
#[must_use]
pub fn round_with(value: f64, digits: u32, mode: RoundingMode) -> f64 {
    let factor = 10_f64.powf(f64::from(digits));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = match mode {
        RoundingMode::HalfAwayFromZero => scaled.round(),
        RoundingMode::HalfToEven => scaled.round_ties_even(),
    };
    rounded / factor
}
