//! Row-by-row analysis of tabular text data.
//!
//! The pipeline turns a [`RawTable`](table::RawTable) of text fields into an
//! [`AnalysisResult`](row::AnalysisResult):
//!
//! 1. [`numeric`] parses each row's fields into numbers, keeping a record of rejected tokens
//! 2. [`row`] sorts the numbers and reduces them with [`rowstat_stats`]
//!
//! Nothing here writes to a global stream. Rejected tokens and rows without
//! data are returned as values so the caller decides how to report them.
//!
//! ```
//! use rowstat_analysis::{row::analyze_table, table::RawTable};
//!
//! let table = RawTable::from_rows([vec!["1", "x", "3"], vec!["oops"]]);
//! let result = analyze_table(&table);
//!
//! assert_eq!(result.len(), 2);
//! let first = &result.rows()[0];
//! assert_eq!(first.rejected.len(), 1);
//! assert_eq!(first.outcome.as_ref().unwrap().stats.mean, 2.0);
//! assert!(result.rows()[1].outcome.is_err());
//! ```

pub mod numeric;
pub mod row;
pub mod table;
