//! Summary statistics for rows of numeric data.
//!
//! This crate reduces a non-empty sequence of `f64` values to the measures
//! reported by `rowstat`:
//!
//! - **Extent**: minimum, maximum and amplitude (`max - min`)
//! - **Central tendency**: mean, median and mode
//! - **Dispersion**: mean absolute deviation and population standard deviation
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for a single sequence of values
//! - [`mode`]: Deterministic mode selection over sorted values
//!
//! # Examples
//!
//! ```
//! use rowstat_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.median, 2.5);
//! assert_eq!(stats.amplitude, 3.0);
//! ```
//!
//! Empty input is an explicit error rather than a default value:
//!
//! ```
//! use rowstat_stats::{EmptyInputError, descriptive::DescriptiveStats};
//!
//! let result = DescriptiveStats::new(std::iter::empty());
//! assert!(matches!(result, Err(EmptyInputError)));
//! ```

pub mod descriptive;
pub mod mode;

/// Error returned when statistics are requested for an empty sequence.
///
/// Minimum, maximum, median and mode have no value for an empty sequence,
/// so the reduction refuses to produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no numeric values to analyze")]
pub struct EmptyInputError;
