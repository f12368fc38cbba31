/// Rows of text fields as read from a delimited-text source.
///
/// No header row is assumed and rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table from anything that yields rows of string-like fields.
    ///
    /// ```
    /// # use rowstat_analysis::table::RawTable;
    /// let table = RawTable::from_rows([vec!["1", "2"], vec!["3"]]);
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.rows()[1], ["3"]);
    /// ```
    #[must_use]
    pub fn from_rows<R, F>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = F>,
        F: Into<String>,
    {
        rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
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
}

impl FromIterator<Vec<String>> for RawTable {
    fn from_iter<T: IntoIterator<Item = Vec<String>>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_are_kept_as_is() {
        let table = RawTable::from_rows([vec!["1", "2", "3"], vec![], vec!["4"]]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].len(), 3);
        assert!(table.rows()[1].is_empty());
        assert_eq!(table.rows()[2], ["4"]);
    }

    #[test]
    fn test_collects_rows_in_order() {
        let table = [vec!["a".to_owned()], vec!["b".to_owned(), "c".to_owned()]]
            .into_iter()
            .collect::<RawTable>();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.rows()[0], ["a"]);
        assert_eq!(table.rows()[1], ["b", "c"]);
        assert!(RawTable::default().is_empty());
    }
}
