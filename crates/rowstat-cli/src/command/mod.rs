use clap::Parser;

use self::analyze::AnalyzeArg;
use crate::logging::{self, Verbosity};

mod analyze;

/// Print descriptive statistics for every row of a CSV file
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    analyze: AnalyzeArg,

    #[clap(flatten)]
    verbosity: Verbosity,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.verbosity);
    analyze::run(&args.analyze)
}
