use rowstat_stats::{EmptyInputError, descriptive::DescriptiveStats};

use crate::{
    numeric::{self, RejectedToken},
    table::RawTable,
};

/// Summary statistics of one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStatistics {
    /// 0-based position of the row in the table.
    pub index: usize,
    pub stats: DescriptiveStats,
}

/// Everything learned from analyzing one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAnalysis {
    /// 0-based position of the row in the table.
    pub index: usize,
    /// Fields of the row that were not valid numbers.
    pub rejected: Vec<RejectedToken>,
    /// Statistics of the valid numbers, or [`EmptyInputError`] when the row has none.
    pub outcome: Result<RowStatistics, EmptyInputError>,
}

impl RowAnalysis {
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-row analyses of a whole table, in table row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    rows: Vec<RowAnalysis>,
}

impl AnalysisResult {
    #[must_use]
    pub fn rows(&self) -> &[RowAnalysis] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows_without_data(&self) -> usize {
        self.rows.iter().filter(|row| !row.has_data()).count()
    }

    #[must_use]
    pub fn rejected_token_count(&self) -> usize {
        self.rows.iter().map(|row| row.rejected.len()).sum()
    }
}

impl<'a> IntoIterator for &'a AnalysisResult {
    type Item = &'a RowAnalysis;
    type IntoIter = std::slice::Iter<'a, RowAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Parses, sorts and reduces a single row of fields.
///
/// A row whose fields are all invalid, or that has no fields at all, yields
/// an [`EmptyInputError`] outcome instead of statistics.
#[must_use]
pub fn analyze_row<S>(index: usize, fields: &[S]) -> RowAnalysis
where
    S: AsRef<str>,
{
    let numeric::ParsedRow {
        mut values,
        rejected,
    } = numeric::parse_tokens(fields);
    values.sort_by(f64::total_cmp);

    let outcome =
        DescriptiveStats::from_sorted(&values).map(|stats| RowStatistics { index, stats });

    RowAnalysis {
        index,
        rejected,
        outcome,
    }
}

/// Analyzes every row of `table` independently.
///
/// The result holds exactly one entry per table row, indexed from 0 in table
/// order. A row without data never affects the other rows.
#[must_use]
pub fn analyze_table(table: &RawTable) -> AnalysisResult {
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, fields)| analyze_row(index, fields))
        .collect();
    AnalysisResult { rows }
}
