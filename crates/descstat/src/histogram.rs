use std::ops::Range;

use crate::{StatsError, frequency};

/// A fixed-width histogram.
///
/// Bin `i` covers `[start + i * step, start + (i + 1) * step)`. Values below
/// the first bin or at/above the end of the last bin are not counted.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

/// Counts the projected values into `bin_count` bins of width `step` starting
/// at `start`.
///
/// The bin index of a value `v` is `floor((v - start) / step)`. Values whose
/// index falls outside `0..bin_count` (including `NaN`) are dropped silently;
/// [`Histogram::total`] tells how many were kept.
///
/// # Arguments
///
/// * `source` - The elements to count
/// * `convert` - Projection from an element to the value being binned
/// * `start` - Lower bound of the first bin
/// * `step` - Width of every bin; must be positive and finite
/// * `bin_count` - Number of bins; must be at least one
///
/// # Errors
///
/// Returns [`StatsError::InvalidParameter`] if `start` is not finite, `step`
/// is not positive and finite, or `bin_count` is zero.
///
/// # Examples
///
/// ```
/// # use descstat::histogram::histogram;
/// let ages = [23, 35, 31, 47, 12, 38];
/// let hist = histogram(ages, f64::from, 20.0, 10.0, 3).unwrap();
/// // [20, 30) [30, 40) [40, 50); 12 is below the first bin
/// assert_eq!(hist.counts(), [1, 3, 1]);
/// assert_eq!(hist.total(), 5);
/// ```
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn histogram<I, F>(
    source: I,
    convert: F,
    start: f64,
    step: f64,
    bin_count: usize,
) -> Result<Histogram, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    if !start.is_finite() {
        return Err(StatsError::invalid("start", "must be finite"));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(StatsError::invalid("step", "must be positive and finite"));
    }
    if bin_count == 0 {
        return Err(StatsError::invalid("bin_count", "must be positive"));
    }

    let mut hist = Histogram::with_layout(start, step, bin_count);
    let upper = crate::central::count_as_f64(bin_count);
    let mut dropped = 0_usize;
    for value in source.into_iter().map(convert) {
        let position = ((value - start) / step).floor();
        if (0.0..upper).contains(&position) {
            hist.bins[position as usize].count += 1;
        } else {
            tracing::trace!(value, "value outside histogram range");
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, bin_count, "dropped values outside histogram range");
    }
    Ok(hist)
}

impl Histogram {
    fn with_layout(start: f64, step: f64, bin_count: usize) -> Self {
        let bins = (0..bin_count)
            .map(|i| {
                // Compute each edge from `start` to avoid accumulating rounding error
                let lower = start + crate::central::count_as_f64(i) * step;
                let upper = start + crate::central::count_as_f64(i + 1) * step;
                HistogramBin {
                    range: lower..upper,
                    count: 0,
                }
            })
            .collect();
        Self { bins }
    }

    /// Returns the bins in ascending order.
    #[must_use]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Returns the count of each bin in ascending order.
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Returns the number of values that fell into some bin.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Always `false` for a histogram built by [`histogram`], which rejects a
    /// zero bin count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns each bin's share of the counted values, rounded to `digits`
    /// decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DivisionByZero`] if no value fell into any bin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use descstat::histogram::histogram;
    /// let hist = histogram([1.0, 2.5, 2.7, 3.1], |v| v, 1.0, 1.0, 3).unwrap();
    /// assert_eq!(hist.relative_frequency(2).unwrap(), [0.25, 0.5, 0.25]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn relative_frequency(&self, digits: u32) -> Result<Vec<f64>, StatsError> {
        frequency::relative_frequency(&self.bins, |bin| bin.count as f64, digits)
    }
}
