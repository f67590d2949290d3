use crate::{StatsError, rounding};

/// Number of decimal places used when the caller has no preference.
pub const DEFAULT_DIGITS: u32 = 2;

/// Returns each projected value's share of the total, rounded to `digits`
/// decimal places (half-away-from-zero).
///
/// Typically applied to histogram counts; see also
/// [`Histogram::relative_frequency`](crate::histogram::Histogram::relative_frequency).
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] if `source` is empty
/// * [`StatsError::DivisionByZero`] if the values sum to zero
///
/// # Examples
///
/// ```
/// use descstat::frequency::{DEFAULT_DIGITS, relative_frequency};
///
/// let counts = [1, 1, 1];
/// assert_eq!(
///     relative_frequency(counts, f64::from, DEFAULT_DIGITS).unwrap(),
///     [0.33, 0.33, 0.33]
/// );
/// ```
pub fn relative_frequency<I, F>(source: I, convert: F, digits: u32) -> Result<Vec<f64>, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    const OPERATION: &str = "relative_frequency";

    let values = source.into_iter().map(convert).collect::<Vec<_>>();
    if values.is_empty() {
        return Err(StatsError::empty(OPERATION));
    }
    let sum = values.iter().sum::<f64>();
    if sum == 0.0 {
        return Err(StatsError::division_by_zero(OPERATION));
    }
    Ok(values
        .into_iter()
        .map(|v| rounding::round(v / sum, digits))
        .collect())
}
