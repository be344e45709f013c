use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ModeSettings;

#[derive(Parser)]
#[command(
    name = "jobdocs",
    version,
    about = "Turn a CSV export of job postings into one plain-text document per posting",
    after_help = "Progress is logged to stderr (set RUST_LOG to adjust). \
                  A JSON summary of the run is printed to stdout."
)]
pub struct Cli {
    /// TOML settings file with optional [ingest] and [split] tables.
    /// Command-line flags take precedence over values from the file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one labeled document per posting (Title, Experience Level,
    /// Work Type, Skills Required, Description).
    ///
    /// Every text field is cleaned: tags stripped, whitespace collapsed,
    /// "nan" treated as empty. Postings without a description are skipped.
    /// Files are named `job_<job_id>.txt`, or `job_<n>.txt` by running
    /// count when the row has no `job_id`.
    Ingest {
        #[command(flatten)]
        common: CommonArgs,
        /// Progress line every N documents written [default: 1000]
        #[arg(long)]
        progress_every: Option<usize>,
    },

    /// Copy one raw text column per row into `job_NNNN.txt` files.
    ///
    /// Every row produces a file, named by zero-padded row index.
    /// The column value is written verbatim, without cleaning.
    Split {
        #[command(flatten)]
        common: CommonArgs,
        /// Column holding the text [default: description]
        #[arg(long)]
        column: Option<String>,
        /// Progress line every N rows [default: 100]
        #[arg(long)]
        progress_every: Option<usize>,
    },
}

/// Flags shared by both modes.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Input CSV file (header row required)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output directory, created if missing [default: data/jobs/raw]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Delete existing job_*.txt files in the output directory first
    #[arg(long)]
    pub clean: bool,
}

impl CommonArgs {
    /// Flags as a settings overlay; unset flags leave lower layers alone.
    #[must_use]
    pub fn to_overrides(&self) -> ModeSettings {
        ModeSettings {
            input: self.input.clone(),
            output_dir: self.output.clone(),
            column: None,
            progress_every: None,
            clean: self.clean.then_some(true),
        }
    }
}
