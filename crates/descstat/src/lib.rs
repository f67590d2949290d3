//! Descriptive statistics over arbitrary sequences.
//!
//! Every function takes an iterable of records together with a projection
//! that extracts the value to measure, so there is no need to copy a field
//! into an intermediate `Vec<f64>` first:
//!
//! - **Central tendency**: average, trimmed mean, median, mode, geometric and harmonic mean
//! - **Dispersion**: deviation, population variance, standard deviation
//! - **Standardization**: z-scores for a sequence or a single value
//! - **Frequency**: fixed-width histograms and relative frequencies
//! - **Summary**: the usual measures computed together
//!
//! All functions are pure and return a [`StatsError`] instead of `NaN` or
//! infinity when the input is empty or a divisor is zero.
//!
//! # Modules
//!
//! - [`central`]: Measures of central tendency
//! - [`dispersion`]: Deviation, variance, standard deviation and z-scores
//! - [`histogram`]: Fixed-width histogram binning
//! - [`frequency`]: Relative frequencies
//! - [`summary`]: Combined summary of a sample
//! - [`rounding`]: Decimal rounding with an explicit tie policy
//!
//! # Examples
//!
//! ## Averages over records
//!
//! ```
//! use descstat::{central, rounding::round};
//!
//! struct Store {
//!     sales: u32,
//! }
//!
//! let stores = [Store { sales: 2024 }, Store { sales: 2164 }, Store { sales: 6465 }];
//! let average = central::average(&stores, |s| f64::from(s.sales)).unwrap();
//! let median = central::median(&stores, |s| f64::from(s.sales)).unwrap();
//! assert_eq!(round(average, 1), 3551.0);
//! assert_eq!(median, 2164.0);
//! ```
//!
//! ## Histogram and relative frequency
//!
//! ```
//! use descstat::histogram::histogram;
//!
//! let response_ms = [12.0, 18.0, 21.0, 25.0, 27.0, 33.0];
//! let hist = histogram(response_ms, |v| v, 10.0, 10.0, 3).unwrap();
//! assert_eq!(hist.counts(), [2, 3, 1]);
//! assert_eq!(hist.relative_frequency(2).unwrap(), [0.33, 0.5, 0.17]);
//! ```
//!
//! ## Z-scores
//!
//! ```
//! use descstat::dispersion::{standard_deviation, standardize};
//!
//! let scores = [2, 4, 4, 4, 5, 5, 7, 9];
//! let sd = standard_deviation(scores, f64::from, None).unwrap();
//! assert_eq!(standardize(9.0, 5.0, sd).unwrap(), 2.0);
//! ```

pub use self::error::StatsError;

pub mod central;
pub mod dispersion;
mod error;
pub mod frequency;
pub mod histogram;
pub mod rounding;
pub mod summary;
#[cfg(test)]
mod testdata;
