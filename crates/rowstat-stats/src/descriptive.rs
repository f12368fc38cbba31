use crate::{EmptyInputError, mode};

/// Descriptive statistics summarizing a sequence of values.
///
/// This structure contains the measures of extent, central tendency and
/// dispersion reported for each row of input. It is only ever built from a
/// non-empty sequence.
///
/// Every measure stays finite for any finite input except `amplitude`, which
/// becomes infinite when `max - min` exceeds `f64::MAX`. Mean and median always
/// lie within `[min, max]`, and a sequence of one repeated value has exactly
/// zero deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the sequence.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// The spread between the extremes (`max - min`).
    pub amplitude: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median value.
    ///
    /// For an even number of values this is the average of the two middle values.
    pub median: f64,
    /// The most frequent value, the smallest one on ties.
    ///
    /// See [`mode::mode_of_sorted`].
    pub mode: f64,
    /// The mean absolute deviation from the mean.
    pub mean_deviation: f64,
    /// The population standard deviation (divides by `count`, not `count - 1`).
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if the iterator yields no values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowstat_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([3.0, 2.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 3.0);
    /// assert_eq!(stats.mode, 2.0);
    /// assert_eq!(stats.median, 2.0);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, EmptyInputError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when the caller already sorted the data to avoid sorting twice.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Finite values sorted in ascending order
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowstat_stats::descriptive::DescriptiveStats;
    /// let mut values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// values.sort_by(f64::total_cmp);
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.std_dev, 2.0_f64.sqrt());
    /// ```
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, EmptyInputError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (&min, &max) = sorted_values
            .first()
            .zip(sorted_values.last())
            .ok_or(EmptyInputError)?;

        let mean = mean_of_sorted(sorted_values, min, max);
        let median = median_of_sorted(sorted_values);
        let mode = mode::mode_of_sorted(sorted_values).ok_or(EmptyInputError)?;
        let Dispersion {
            mean_deviation,
            std_dev,
        } = Dispersion::around(sorted_values, mean);

        Ok(Self {
            count: sorted_values.len(),
            min,
            max,
            amplitude: max - min,
            mean,
            median,
            mode,
            mean_deviation,
            std_dev,
        })
    }
}

/// Mean of a non-empty sorted slice, accumulated as offsets from `min`.
///
/// Offsets keep repeated values exact. They are halved when the full range
/// does not fit in an `f64`.
#[expect(clippy::cast_precision_loss)]
fn mean_of_sorted(sorted_values: &[f64], min: f64, max: f64) -> f64 {
    let n = sorted_values.len() as f64;
    let mean = if (max - min).is_finite() {
        min + sorted_values.iter().map(|v| (v - min) / n).sum::<f64>()
    } else {
        let half = sorted_values
            .iter()
            .map(|v| (v / 2.0 - min / 2.0) / n)
            .sum::<f64>();
        min + half + half
    };
    mean.clamp(min, max)
}

/// Median of a non-empty sorted slice.
fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    if n % 2 == 0 {
        let (a, b) = (sorted_values[n / 2 - 1], sorted_values[n / 2]);
        // Halving first cannot overflow; clamping covers subnormal rounding
        (a / 2.0 + b / 2.0).clamp(a, b)
    } else {
        sorted_values[(n - 1) / 2]
    }
}

/// Spread of values around their mean.
struct Dispersion {
    mean_deviation: f64,
    std_dev: f64,
}

impl Dispersion {
    /// Deviations are taken at half scale and the squared terms normalized by
    /// the largest deviation, so neither step overflows.
    #[expect(clippy::cast_precision_loss)]
    fn around(values: &[f64], mean: f64) -> Self {
        let n = values.len() as f64;
        let half_deviations = || values.iter().map(|v| (v / 2.0 - mean / 2.0).abs());

        let scale = half_deviations().fold(0.0, f64::max);
        if scale <= 0.0 {
            return Self {
                mean_deviation: 0.0,
                std_dev: 0.0,
            };
        }

        let half_mean_deviation = half_deviations().map(|d| d / n).sum::<f64>();
        let scaled_variance = half_deviations().map(|d| (d / scale).powi(2)).sum::<f64>() / n;

        Self {
            mean_deviation: half_mean_deviation * 2.0,
            std_dev: scale * (2.0 * scaled_variance.sqrt()),
        }
    }
}
