use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock},
    path::{Path, PathBuf},
};

use anyhow::Context;
use rowstat_analysis::table::RawTable;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read a whole CSV file into a [`RawTable`]
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be opened, or is not
/// valid CSV. No rows are returned in any of these cases.
pub fn read_csv_file<P>(path: P) -> anyhow::Result<RawTable>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let exists = path
        .try_exists()
        .with_context(|| format!("Failed to access {}", path.display()))?;
    if !exists {
        anyhow::bail!("{} does not exist.", path.display());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    read_csv(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Read comma-separated records without a header row
///
/// Records may have different numbers of fields.
pub fn read_csv<R>(reader: R) -> Result<RawTable, csv::Error>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    reader
        .records()
        .map(|record| {
            record.map(|record| record.iter().map(str::to_owned).collect::<Vec<_>>())
        })
        .collect()
}
