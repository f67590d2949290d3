//! Measures of central tendency.
//!
//! Each function takes any iterable plus a projection that maps an element to
//! the value being measured, so records can be summarized without first
//! copying a field into a separate vector:
//!
//! ```
//! use descstat::central::average;
//!
//! struct Sale {
//!     amount: u32,
//! }
//!
//! let sales = [Sale { amount: 120 }, Sale { amount: 80 }];
//! let avg = average(&sales, |s| f64::from(s.amount)).unwrap();
//! assert_eq!(avg, 100.0);
//! ```

use std::{collections::HashMap, hash::Hash};

use crate::StatsError;

/// Computes the arithmetic mean `sum / count` of the projected values.
///
/// # Examples
///
/// ```
/// # use descstat::central::average;
/// let values = [1, 2, 3, 4];
/// assert_eq!(average(values, f64::from).unwrap(), 2.5);
/// ```
pub fn average<I, F>(source: I, convert: F) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let (count, sum) = source
        .into_iter()
        .map(convert)
        .fold((0_usize, 0.0), |(count, sum), v| (count + 1, sum + v));
    if count == 0 {
        return Err(StatsError::empty("average"));
    }
    Ok(sum / count_as_f64(count))
}

/// Computes the mean after trimming a fraction of the extreme values.
///
/// The projected values are sorted ascending and `floor(n * rate / 2)` values
/// are removed from each end before averaging. `rate = 0.0` is the plain
/// mean; `rate = 0.2` drops the lowest and highest 10%.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] if `source` is empty
/// * [`StatsError::InvalidParameter`] if `rate` is not within `[0, 1]`, or if
///   trimming would leave no values
///
/// # Examples
///
/// ```
/// # use descstat::central::trimmed_mean;
/// let values = [47, 27, 25, 22, 18, 19, 20];
/// // floor(7 * 0.3 / 2) = 1 value dropped from each end
/// let mean = trimmed_mean(values, f64::from, 0.3).unwrap();
/// assert!((mean - 22.6).abs() < 1e-9);
/// ```
pub fn trimmed_mean<I, F>(source: I, convert: F, rate: f64) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    if !(0.0..=1.0).contains(&rate) {
        return Err(StatsError::invalid("rate", "must be within [0, 1]"));
    }
    let sorted = sorted_values(source, convert);
    if sorted.is_empty() {
        return Err(StatsError::empty("trimmed_mean"));
    }
    trimmed_mean_of_sorted(&sorted, rate)
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn trimmed_mean_of_sorted(sorted: &[f64], rate: f64) -> Result<f64, StatsError> {
    let size = sorted.len();
    let trim = (size as f64 * rate / 2.0).floor() as usize;
    let kept = &sorted[trim.min(size)..size.saturating_sub(trim)];
    if kept.is_empty() {
        return Err(StatsError::invalid("rate", "trimming leaves no values"));
    }
    tracing::trace!(size, trim, "trimmed mean");
    Ok(kept.iter().sum::<f64>() / count_as_f64(kept.len()))
}

/// Computes the median of the projected values.
///
/// For an even number of values the median is the mean of the two middle
/// values.
///
/// # Examples
///
/// ```
/// # use descstat::central::median;
/// assert_eq!(median([3, 1, 2], f64::from).unwrap(), 2.0);
/// assert_eq!(median([4, 1, 3, 2], f64::from).unwrap(), 2.5);
/// ```
pub fn median<I, F>(source: I, convert: F) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let sorted = sorted_values(source, convert);
    median_of_sorted(&sorted).ok_or(StatsError::empty("median"))
}

pub(crate) fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(f64::midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}

/// Returns the most frequent key.
///
/// When several keys share the highest count, the one that first appeared
/// earliest in `source` wins, so the result is deterministic for a given
/// input order.
///
/// # Examples
///
/// ```
/// # use descstat::central::mode;
/// let words = ["b", "a", "b", "c", "a"];
/// assert_eq!(mode(words, |w| w).unwrap(), "b");
/// ```
pub fn mode<I, K, F>(source: I, key: F) -> Result<K, StatsError>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(I::Item) -> K,
{
    // Counts are kept in first-occurrence order.
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for k in source.into_iter().map(key) {
        match index.get(&k) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(k.clone(), counts.len());
                counts.push((k, 1));
            }
        }
    }

    let mut best: Option<(K, usize)> = None;
    for (k, count) in counts {
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((k, count));
        }
    }
    best.map(|(k, _)| k).ok_or(StatsError::empty("mode"))
}

/// Computes the geometric mean `product^(1 / count)`.
///
/// Zero or negative values are not rejected; the result follows
/// [`f64::powf`] (a negative product yields `NaN`).
///
/// # Examples
///
/// ```
/// # use descstat::{central::geometric_mean, rounding::round};
/// let growth = [1.2, 0.7, 1.1];
/// assert_eq!(round(geometric_mean(growth, |v| v).unwrap(), 3), 0.974);
/// ```
pub fn geometric_mean<I, F>(source: I, convert: F) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let (count, product) = source
        .into_iter()
        .map(convert)
        .fold((0_usize, 1.0), |(count, product), v| {
            (count + 1, product * v)
        });
    if count == 0 {
        return Err(StatsError::empty("geometric_mean"));
    }
    Ok(product.powf(1.0 / count_as_f64(count)))
}

/// Computes the harmonic mean `count / sum(1 / x)`.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] if `source` is empty
/// * [`StatsError::DivisionByZero`] if any value is zero, or the reciprocals
///   sum to zero
///
/// # Examples
///
/// ```
/// # use descstat::{central::harmonic_mean, rounding::round};
/// // Average speed over two equal distances at 110 and 90 km/h
/// assert_eq!(round(harmonic_mean([110, 90], f64::from).unwrap(), 0), 99.0);
/// ```
pub fn harmonic_mean<I, F>(source: I, convert: F) -> Result<f64, StatsError>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    const OPERATION: &str = "harmonic_mean";

    let mut count = 0_usize;
    let mut reciprocal_sum = 0.0;
    for v in source.into_iter().map(convert) {
        if v == 0.0 {
            return Err(StatsError::division_by_zero(OPERATION));
        }
        count += 1;
        reciprocal_sum += 1.0 / v;
    }
    if count == 0 {
        return Err(StatsError::empty(OPERATION));
    }
    if reciprocal_sum == 0.0 {
        return Err(StatsError::division_by_zero(OPERATION));
    }
    Ok(count_as_f64(count) / reciprocal_sum)
}

/// Projects every element and sorts the results ascending.
pub(crate) fn sorted_values<I, F>(source: I, convert: F) -> Vec<f64>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> f64,
{
    let mut values = source.into_iter().map(convert).collect::<Vec<_>>();
    values.sort_by(f64::total_cmp);
    values
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn count_as_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, seq::SliceRandom as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        rounding::{RoundingMode, round, round_with},
        testdata::{ACCESS, SALES},
    };

    #[test]
    fn test_average_access_sample() {
        assert_eq!(average(ACCESS, f64::from).unwrap(), 347.4);
        assert_eq!(average(ACCESS.iter().take(5), |&n| f64::from(n)).unwrap(), 347.6);
    }

    #[test]
    fn test_average_empty() {
        let values: [u32; 0] = [];
        assert_eq!(
            average(values, f64::from),
            Err(StatsError::EmptyInput {
                operation: "average"
            })
        );
    }

    #[test]
    fn test_median_even_sales_sample() {
        let value = median(SALES, f64::from).unwrap();
        assert_eq!(value, 2464.5);
        assert_eq!(round_with(value, 0, RoundingMode::HalfToEven), 2464.0);
        assert_eq!(round(value, 0), 2465.0);
    }

    #[test]
    fn test_median_odd_and_single() {
        assert_eq!(median([47, 27, 25, 22, 18, 19, 20], f64::from).unwrap(), 22.0);
        assert_eq!(median([5.5], |v| v).unwrap(), 5.5);
    }

    #[test]
    fn test_median_empty() {
        let values: Vec<f64> = vec![];
        assert!(matches!(
            median(values, |v| v),
            Err(StatsError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_trimmed_mean_sales_with_dummies() {
        let values = SALES.iter().copied().chain([0, 0]).collect::<Vec<_>>();
        assert_eq!(values.len(), 22);
        let mean = trimmed_mean(&values, |&n| f64::from(n), 0.2).unwrap();
        assert_eq!(round(mean, 0), 2484.0);
    }

    #[test]
    fn test_trimmed_mean_zero_rate_is_average() {
        let trimmed = trimmed_mean(ACCESS, f64::from, 0.0).unwrap();
        assert!((trimmed - 347.4).abs() < 1e-9);
    }

    #[test]
    fn test_trimmed_mean_invalid_rate() {
        for rate in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                trimmed_mean([1, 2, 3], f64::from, rate),
                Err(StatsError::InvalidParameter { name: "rate", .. })
            ));
        }
    }

    #[test]
    fn test_trimmed_mean_nothing_left() {
        // floor(4 * 1.0 / 2) = 2 from each end
        assert!(matches!(
            trimmed_mean([1, 2, 3, 4], f64::from, 1.0),
            Err(StatsError::InvalidParameter { .. })
        ));
        // odd length keeps the middle value
        assert_eq!(trimmed_mean([1, 2, 9], f64::from, 1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_trimmed_mean_empty() {
        let values: [u32; 0] = [];
        assert!(matches!(
            trimmed_mean(values, f64::from, 0.2),
            Err(StatsError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_order_invariance() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let expected_avg = average(SALES, f64::from).unwrap();
        let expected_median = median(SALES, f64::from).unwrap();
        let expected_trimmed = trimmed_mean(SALES, f64::from, 0.2).unwrap();

        let mut shuffled = SALES.to_vec();
        for _ in 0..10 {
            shuffled.shuffle(&mut rng);
            let avg = average(&shuffled, |&n| f64::from(n)).unwrap();
            assert!((avg - expected_avg).abs() < 1e-9);
            assert_eq!(median(&shuffled, |&n| f64::from(n)).unwrap(), expected_median);
            let trimmed = trimmed_mean(&shuffled, |&n| f64::from(n), 0.2).unwrap();
            assert!((trimmed - expected_trimmed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mode_counts() {
        let values = [3, 1, 3, 2, 1, 3];
        assert_eq!(mode(values, |v| v).unwrap(), 3);
    }

    #[test]
    fn test_mode_tie_prefers_first_occurrence() {
        assert_eq!(mode(["x", "y", "y", "x"], |v| v).unwrap(), "x");
        assert_eq!(mode(["y", "x", "x", "y"], |v| v).unwrap(), "y");
    }

    #[test]
    fn test_mode_is_deterministic() {
        let values = ["a", "b", "c", "b", "c", "a", "d"];
        let first = mode(values, |v| v).unwrap();
        for _ in 0..5 {
            assert_eq!(mode(values, |v| v).unwrap(), first);
        }
    }

    #[test]
    fn test_mode_projection_to_key() {
        struct Item {
            category: &'static str,
        }
        let items = [
            Item { category: "fruit" },
            Item { category: "veg" },
            Item { category: "veg" },
        ];
        assert_eq!(mode(&items, |i| i.category).unwrap(), "veg");
    }

    #[test]
    fn test_mode_owned_keys() {
        let tags = ["red", "blue", "red", "green"];
        assert_eq!(mode(tags, str::to_owned).unwrap(), "red");
    }

    #[test]
    fn test_mode_empty() {
        let values: [i32; 0] = [];
        assert!(matches!(
            mode(values, |v| v),
            Err(StatsError::EmptyInput { operation: "mode" })
        ));
    }

    #[test]
    fn test_geometric_mean() {
        let mean = geometric_mean([1.2, 0.7, 1.1], |v| v).unwrap();
        assert_eq!(round(mean, 3), 0.974);
        assert_eq!(geometric_mean([2.0, 8.0], |v| v).unwrap(), 4.0);
    }

    #[test]
    fn test_geometric_mean_negative_product_is_nan() {
        assert!(geometric_mean([-2.0, 8.0], |v| v).unwrap().is_nan());
        assert_eq!(geometric_mean([0.0, 8.0], |v| v).unwrap(), 0.0);
    }

    #[test]
    fn test_geometric_mean_empty() {
        let values: Vec<f64> = vec![];
        assert_eq!(
            geometric_mean(values, |v| v),
            Err(StatsError::EmptyInput {
                operation: "geometric_mean"
            })
        );
    }

    #[test]
    fn test_harmonic_mean() {
        let mean = harmonic_mean([110, 90], f64::from).unwrap();
        assert_eq!(round(mean, 0), 99.0);
    }

    #[test]
    fn test_harmonic_mean_zero_value() {
        assert_eq!(
            harmonic_mean([1.0, 0.0, 2.0], |v| v),
            Err(StatsError::DivisionByZero {
                operation: "harmonic_mean"
            })
        );
        assert!(matches!(
            harmonic_mean([2.0, -2.0], |v| v),
            Err(StatsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_harmonic_mean_empty() {
        let values: Vec<f64> = vec![];
        assert!(matches!(
            harmonic_mean(values, |v| v),
            Err(StatsError::EmptyInput { .. })
        ));
    }
}
