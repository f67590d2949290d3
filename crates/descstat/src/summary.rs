use crate::{StatsError, central, dispersion};

/// A one-pass overview of a sample.
///
/// Combines the central-tendency and dispersion measures that are usually
/// reported together. The projected values are collected and sorted once.
///
/// # Examples
///
/// ```
/// use descstat::summary::Summary;
///
/// let summary = Summary::new([47, 27, 25, 22, 18, 19, 20], f64::from, 0.3).unwrap();
/// assert_eq!(summary.count, 7);
/// assert_eq!(summary.median, 22.0);
/// assert_eq!(summary.min, 18.0);
/// assert_eq!(summary.max, 47.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub average: f64,
    /// Median (mean of the two middle values for an even count).
    pub median: f64,
    /// The trim rate used for [`Summary::trimmed_mean`].
    pub trim_rate: f64,
    /// Mean after trimming `floor(count * trim_rate / 2)` values from each end.
    pub trimmed_mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub standard_deviation: f64,
}

impl Summary {
    /// Computes the summary of the projected values.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyInput`] if `source` is empty
    /// * [`StatsError::InvalidParameter`] if `trim_rate` is out of range or
    ///   trims every value
    pub fn new<I, F>(source: I, convert: F, trim_rate: f64) -> Result<Self, StatsError>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> f64,
    {
        if !(0.0..=1.0).contains(&trim_rate) {
            return Err(StatsError::invalid("trim_rate", "must be within [0, 1]"));
        }
        let sorted = central::sorted_values(source, convert);
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Err(StatsError::empty("summary"));
        };
        let average = central::average(&sorted, |&v| v)?;
        let median = central::median_of_sorted(&sorted).ok_or(StatsError::empty("summary"))?;
        let trimmed_mean = central::trimmed_mean_of_sorted(&sorted, trim_rate)?;
        let variance = dispersion::variance_of(&sorted, Some(average), "summary")?;

        Ok(Self {
            count: sorted.len(),
            min,
            max,
            average,
            median,
            trim_rate,
            trimmed_mean,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }
}
