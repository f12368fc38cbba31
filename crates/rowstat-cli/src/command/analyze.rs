use std::{io::Write as _, path::PathBuf};

use anyhow::Context;
use clap::Args;
use rowstat_analysis::row::{self, AnalysisResult};

use crate::{report, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the CSV file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the report to this path instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let table = util::read_csv_file(&arg.file)?;
    tracing::info!("Read {} rows from {}", table.len(), arg.file.display());

    let result = row::analyze_table(&table);
    log_diagnostics(&result);

    let mut output = util::Output::from_output_path(arg.output.clone())?;
    report::write_analysis(&mut output, &result)
        .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
    output
        .flush()
        .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;

    Ok(())
}

fn log_diagnostics(result: &AnalysisResult) {
    for analysis in result {
        for rejected in &analysis.rejected {
            tracing::warn!(row = analysis.index, "{rejected}");
        }
        if let Err(err) = &analysis.outcome {
            tracing::warn!(row = analysis.index, "{err}");
        }
    }
    tracing::debug!(
        rows = result.len(),
        without_data = result.rows_without_data(),
        rejected_tokens = result.rejected_token_count(),
        "Analysis finished"
    );
}
