/// Computes the mode of values sorted in ascending order.
///
/// The mode is the value with the highest number of occurrences. When several
/// values share the highest count, the smallest of them is returned. A sequence
/// in which every value is distinct therefore has its minimum as mode.
///
/// Values are grouped by numeric equality, so `-0.0` and `0.0` count as the
/// same value.
///
/// # Returns
///
/// * `Some(mode)` - if the sequence contains at least one value
/// * `None` - if the sequence is empty
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use rowstat_stats::mode::mode_of_sorted;
///
/// assert_eq!(mode_of_sorted(&[1.0, 2.0, 2.0, 3.0]), Some(2.0));
/// // Tie between 1.0 and 3.0: the smaller value wins
/// assert_eq!(mode_of_sorted(&[1.0, 1.0, 2.0, 3.0, 3.0]), Some(1.0));
/// assert_eq!(mode_of_sorted(&[]), None);
/// ```
#[expect(clippy::float_cmp)]
#[must_use]
pub fn mode_of_sorted(sorted_values: &[f64]) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let mut best: Option<(f64, usize)> = None;
    for run in sorted_values.chunk_by(|a, b| a == b) {
        let count = run.len();
        // Strictly greater: earlier (smaller) values keep ties
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((run[0], count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(mode_of_sorted(&[5.0]), Some(5.0));
    }

    #[test]
    fn test_unique_majority() {
        assert_eq!(mode_of_sorted(&[1.0, 2.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mode_of_sorted(&[1.0, 4.0, 4.0, 4.0, 7.0, 7.0]), Some(4.0));
    }

    #[test]
    fn test_all_distinct_returns_minimum() {
        assert_eq!(mode_of_sorted(&[-3.5, 0.0, 2.0, 9.0]), Some(-3.5));
    }

    #[test]
    fn test_tie_prefers_smallest_value() {
        assert_eq!(mode_of_sorted(&[1.0, 2.0, 2.0, 5.0, 5.0]), Some(2.0));
        assert_eq!(mode_of_sorted(&[-1.0, -1.0, 8.0, 8.0]), Some(-1.0));
    }

    #[test]
    fn test_majority_at_end() {
        assert_eq!(mode_of_sorted(&[1.0, 2.0, 9.0, 9.0, 9.0]), Some(9.0));
    }

    #[test]
    fn test_signed_zeros_are_one_value() {
        assert_eq!(mode_of_sorted(&[-1.0, -0.0, 0.0, 1.0]), Some(-0.0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(mode_of_sorted(&[]), None);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_unsorted_input_panics() {
        let _ = mode_of_sorted(&[3.0, 1.0]);
    }
}
