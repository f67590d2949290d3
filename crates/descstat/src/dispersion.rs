//! Deviation, variance, standard deviation and standardization.
//!
//! Variance is the population variance (divisor `n`). Functions that need the
//! mean accept a precomputed one so repeated calls over the same data can skip
//! the extra pass.

use crate::{StatsError, central};

/// Returns each projected value minus the average.
///
/// If `average` is `None` it is computed from `source`.
///
/// # Examples
///
/// ```
/// # use descstat::dispersion::deviation;
/// assert_eq!(deviation([1, 2, 6], f64::from, None).unwrap(), [-2.0, -1.0, 3.0]);
/// assert_eq!(deviation([1, 2, 6], f64::from, Some(2.0)).unwrap(), [-1.0, 0.0, 4.0]);
/// ```
pub fn deviation<I, F>(source: I, convert: F, average: Option<f64>) -> Result<Vec<f64>, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let values = source.into_iter().map(convert).collect::<Vec<_>>();
    deviation_of(&values, average, "deviation")
}

fn deviation_of(
    values: &[f64],
    average: Option<f64>,
    operation: &'static str,
) -> Result<Vec<f64>, StatsError> {
    if values.is_empty() {
        return Err(StatsError::empty(operation));
    }
    let average = match average {
        Some(average) => average,
        None => central::average(values, |&v| v)?,
    };
    Ok(values.iter().map(|v| v - average).collect())
}

/// Computes the population variance: the mean of the squared deviations.
///
/// # Examples
///
/// ```
/// # use descstat::dispersion::variance;
/// let values = [2, 4, 4, 4, 5, 5, 7, 9];
/// assert_eq!(variance(values, f64::from, None).unwrap(), 4.0);
/// ```
pub fn variance<I, F>(source: I, convert: F, average: Option<f64>) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let values = source.into_iter().map(convert).collect::<Vec<_>>();
    variance_of(&values, average, "variance")
}

pub(crate) fn variance_of(
    values: &[f64],
    average: Option<f64>,
    operation: &'static str,
) -> Result<f64, StatsError> {
    let deviations = deviation_of(values, average, operation)?;
    central::average(deviations, |d| d * d)
}

/// Computes the population standard deviation, `sqrt(variance)`.
///
/// # Examples
///
/// ```
/// # use descstat::dispersion::standard_deviation;
/// let values = [2, 4, 4, 4, 5, 5, 7, 9];
/// assert_eq!(standard_deviation(values, f64::from, Some(5.0)).unwrap(), 2.0);
/// ```
pub fn standard_deviation<I, F>(
    source: I,
    convert: F,
    average: Option<f64>,
) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let values = source.into_iter().map(convert).collect::<Vec<_>>();
    Ok(variance_of(&values, average, "standard_deviation")?.sqrt())
}

/// Standardizes each projected value into a z-score.
///
/// Missing `average` and `standard_deviation` are computed from `source`; the
/// standard deviation is computed around the given (or computed) average.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] if `source` is empty
/// * [`StatsError::DivisionByZero`] if the standard deviation is zero
///
/// # Examples
///
/// ```
/// # use descstat::dispersion::standardization;
/// let z = standardization([2, 4, 4, 4, 5, 5, 7, 9], f64::from, None, None).unwrap();
/// assert_eq!(z[0], -1.5);
/// assert_eq!(z[7], 2.0);
/// ```
pub fn standardization<I, F>(
    source: I,
    convert: F,
    average: Option<f64>,
    standard_deviation: Option<f64>,
) -> Result<Vec<f64>, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    const OPERATION: &str = "standardization";

    let values = source.into_iter().map(convert).collect::<Vec<_>>();
    let deviations = deviation_of(&values, average, OPERATION)?;
    let standard_deviation = match standard_deviation {
        Some(sd) => sd,
        None => central::average(&deviations, |&d| d * d)?.sqrt(),
    };
    if standard_deviation == 0.0 {
        return Err(StatsError::division_by_zero(OPERATION));
    }
    Ok(deviations
        .into_iter()
        .map(|d| d / standard_deviation)
        .collect())
}

/// Standardizes a single value: `(value - average) / standard_deviation`.
///
/// # Examples
///
/// ```
/// # use descstat::{dispersion::standardize, rounding::round};
/// let z = standardize(95.0, 70.0, 12.99).unwrap();
/// assert_eq!(round(z, 2), 1.92);
/// ```
pub fn standardize(value: f64, average: f64, standard_deviation: f64) -> Result<f64, StatsError> {
    if standard_deviation == 0.0 {
        return Err(StatsError::division_by_zero("standardize"));
    }
    Ok((value - average) / standard_deviation)
}
