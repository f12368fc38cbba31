use clap::{ArgAction, Args};
use tracing::Level;

/// Diagnostic verbosity options
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Show more diagnostics (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Verbosity {
    pub fn level(self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so they never mix with the report.
pub fn init(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbosity.level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
