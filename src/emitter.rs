use std::io::Read;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, Mode};
use crate::error::Result;
use crate::ingest::normalize::Normalizer;
use crate::ingest::source::CsvSource;
use crate::ingest::writer::{composite_file_name, sequential_file_name, ArtifactWriter};
use crate::models::posting::JobPosting;

/// Summary of an emit run.
#[derive(Debug, Clone, Serialize)]
pub struct EmitResult {
    pub mode: Mode,
    /// Data rows read from the source (header excluded).
    pub rows_read: usize,
    /// Artifacts written. Same-named artifacts written twice count twice.
    pub files_written: usize,
    /// Composite mode only: rows dropped for lacking a description.
    pub skipped_no_description: usize,
    /// Stale `job_*.txt` files removed before writing (`--clean`).
    pub stale_removed: usize,
    pub output_dir: String,
}

impl EmitResult {
    fn new(config: &Config) -> Self {
        Self {
            mode: config.mode,
            rows_read: 0,
            files_written: 0,
            skipped_no_description: 0,
            stale_removed: 0,
            output_dir: config.output_dir.display().to_string(),
        }
    }
}

/// Open the configured input and emit artifacts according to `config.mode`.
pub fn run_emit(config: &Config) -> Result<EmitResult> {
    let mut source = CsvSource::open(&config.input)?;
    emit(&mut source, config)
}

/// Emit artifacts from an already opened source.
///
/// Creates the output directory, optionally clears stale artifacts, then
/// processes rows one at a time. The first source or write error aborts the
/// run; artifacts written before it stay on disk.
pub fn emit<R: Read>(source: &mut CsvSource<R>, config: &Config) -> Result<EmitResult> {
    config.ensure_output_dir()?;
    let writer = ArtifactWriter::new(&config.output_dir);

    let mut result = EmitResult::new(config);
    if config.clean {
        result.stale_removed = writer.remove_stale()?;
        info!(
            removed = result.stale_removed,
            dir = %writer.dir().display(),
            "Removed stale artifacts"
        );
    }

    info!(
        input = %source.path().display(),
        mode = config.mode.as_str(),
        "Reading source and writing job documents"
    );

    let rows_read = match config.mode {
        Mode::Composite => emit_composite(source, &writer, config, &mut result)?,
        Mode::Sequential => emit_sequential(source, &writer, config, &mut result)?,
    };
    result.rows_read = rows_read;

    match config.mode {
        Mode::Composite => info!(
            "Success! {} detailed job files created in '{}'",
            result.files_written, result.output_dir
        ),
        Mode::Sequential => info!(
            "Done! Created {} text files in {}",
            result.files_written, result.output_dir
        ),
    }

    Ok(result)
}

/// Labeled composite documents, named by `job_id`, description required.
fn emit_composite<R: Read>(
    source: &mut CsvSource<R>,
    writer: &ArtifactWriter,
    config: &Config,
    result: &mut EmitResult,
) -> Result<usize> {
    let normalizer = Normalizer::new();

    source.for_each_record(|record| {
        let posting = JobPosting::from_record(&record, &normalizer);
        if !posting.has_description() {
            result.skipped_no_description += 1;
            debug!(row = record.row, "Skipping posting without description");
            return Ok(());
        }

        let name = composite_file_name(posting.job_id.as_deref(), result.files_written);
        writer.write(&name, &posting.document().render())?;
        result.files_written += 1;

        if config.progress_due(result.files_written) {
            info!("Processed {} jobs...", result.files_written);
        }
        Ok(())
    })
}

/// Raw text column only, one `job_NNNN.txt` per row.
fn emit_sequential<R: Read>(
    source: &mut CsvSource<R>,
    writer: &ArtifactWriter,
    config: &Config,
    result: &mut EmitResult,
) -> Result<usize> {
    if !source.columns().contains(&config.column) {
        warn!(
            column = %config.column,
            "Column not found in header, every artifact will be empty"
        );
    }

    source.for_each_record(|record| {
        let content = record.field(&config.column).unwrap_or_default();
        writer.write(&sequential_file_name(record.row), content)?;
        result.files_written += 1;

        if config.progress_due(record.row) {
            info!("Processed {} files...", record.row);
        }
        Ok(())
    })
}
