//! Plain-text report of an analysis
//!
//! Each row becomes one block of labeled lines followed by a blank line.
//! Counts print as integers and measures with six decimal places.

use std::io::{self, Write};

use rowstat_analysis::row::{AnalysisResult, RowAnalysis, RowStatistics};

pub fn write_analysis<W>(writer: &mut W, result: &AnalysisResult) -> io::Result<()>
where
    W: Write,
{
    for analysis in result {
        write_row(writer, analysis)?;
    }
    Ok(())
}

fn write_row<W>(writer: &mut W, analysis: &RowAnalysis) -> io::Result<()>
where
    W: Write,
{
    match &analysis.outcome {
        Ok(row) => write_statistics(writer, row),
        Err(_) => {
            writeln!(writer, "Line Index Analysis: {}", analysis.index)?;
            writeln!(writer, "No numeric values")?;
            writeln!(writer)
        }
    }
}

fn write_statistics<W>(writer: &mut W, row: &RowStatistics) -> io::Result<()>
where
    W: Write,
{
    let stats = &row.stats;
    writeln!(writer, "Line Index Analysis: {}", row.index)?;
    writeln!(writer, "Amount of Values: {}", stats.count)?;
    writeln!(writer, "Maximum: {:.6}", stats.max)?;
    writeln!(writer, "Minimum: {:.6}", stats.min)?;
    writeln!(writer, "Mean: {:.6}", stats.mean)?;
    writeln!(writer, "Mode: {:.6}", stats.mode)?;
    writeln!(writer, "Median: {:.6}", stats.median)?;
    writeln!(writer, "Mean Deviation: {:.6}", stats.mean_deviation)?;
    writeln!(writer, "Standard Deviation: {:.6}", stats.std_dev)?;
    writeln!(writer, "Amplitude: {:.6}", stats.amplitude)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use rowstat_analysis::{row::analyze_table, table::RawTable};

    use super::*;

    fn render(rows: &[&[&str]]) -> String {
        let table = RawTable::from_rows(rows.iter().map(|row| row.iter().copied()));
        let mut buf = Vec::new();
        write_analysis(&mut buf, &analyze_table(&table)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_row_block_layout() {
        let text = render(&[&["4", "1", "3", "2"]]);
        assert_eq!(
            text,
            "Line Index Analysis: 0\n\
             Amount of Values: 4\n\
             Maximum: 4.000000\n\
             Minimum: 1.000000\n\
             Mean: 2.500000\n\
             Mode: 1.000000\n\
             Median: 2.500000\n\
             Mean Deviation: 1.000000\n\
             Standard Deviation: 1.118034\n\
             Amplitude: 3.000000\n\
             \n"
        );
    }

    #[test]
    fn test_rows_without_data_are_reported_in_place() {
        let text = render(&[&["7"], &["x", "y"], &["-1.5", "1.5"]]);
        let blocks = text.split("\n\n").collect::<Vec<_>>();

        // Trailing separator leaves an empty last piece
        assert_eq!(blocks.len(), 4);
        assert!(blocks[0].starts_with("Line Index Analysis: 0\nAmount of Values: 1\n"));
        assert_eq!(blocks[1], "Line Index Analysis: 1\nNo numeric values");
        assert!(blocks[2].starts_with("Line Index Analysis: 2\nAmount of Values: 2\n"));
        assert!(blocks[2].contains("Mean: 0.000000\n"));
        assert!(blocks[2].ends_with("Amplitude: 3.000000"));
        assert_eq!(blocks[3], "");
    }

    #[test]
    fn test_empty_analysis_writes_nothing() {
        assert_eq!(render(&[]), "");
    }
}
