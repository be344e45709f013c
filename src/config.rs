use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JobDocsError, Result};

/// Default CSV export read by `jobdocs ingest`.
const COMPOSITE_INPUT: &str = "postings.csv";
/// Default CSV export read by `jobdocs split`.
const SEQUENTIAL_INPUT: &str = "job_postings.csv";
/// Default directory that receives the `job_*.txt` artifacts.
const OUTPUT_DIR: &str = "data/jobs/raw";
/// Column copied verbatim by `jobdocs split`.
const TEXT_COLUMN: &str = "description";
/// Progress line every N artifacts written (composite mode).
const COMPOSITE_PROGRESS_EVERY: usize = 1000;
/// Progress line every N rows read (sequential mode).
const SEQUENTIAL_PROGRESS_EVERY: usize = 100;

/// How rows are turned into artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Labeled composite document, identifier-keyed names, rows without a
    /// description are skipped.
    Composite,
    /// Raw text column only, `job_NNNN.txt` names, one file per row.
    Sequential,
}

impl Mode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Composite => "composite",
            Mode::Sequential => "sequential",
        }
    }
}

/// Resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// CSV file to read (header row required).
    pub input: PathBuf,
    /// Directory receiving the artifacts; created if missing.
    pub output_dir: PathBuf,
    /// Column written verbatim in sequential mode. Ignored in composite mode.
    pub column: String,
    /// Emit a progress line every N units of work. 0 disables progress lines.
    pub progress_every: usize,
    /// Remove stale `job_*.txt` files from the output directory before writing.
    pub clean: bool,
}

/// Settings file layout: one optional table per mode.
///
/// ```toml
/// [ingest]
/// input = "postings.csv"
/// output_dir = "data/jobs/raw"
///
/// [split]
/// column = "description"
/// progress_every = 500
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettings {
    /// Settings for `jobdocs ingest` (composite mode).
    pub ingest: ModeSettings,
    /// Settings for `jobdocs split` (sequential mode).
    pub split: ModeSettings,
}

/// Partial settings for one mode. Unset fields keep the previous value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeSettings {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub column: Option<String>,
    pub progress_every: Option<usize>,
    pub clean: Option<bool>,
}

impl UserSettings {
    /// Load settings from a TOML file. The file must exist when given explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| JobDocsError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| JobDocsError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Settings table for the given mode.
    #[must_use]
    pub fn for_mode(&self, mode: Mode) -> &ModeSettings {
        match mode {
            Mode::Composite => &self.ingest,
            Mode::Sequential => &self.split,
        }
    }
}

impl Config {
    /// Built-in defaults for a mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        let (input, progress_every) = match mode {
            Mode::Composite => (COMPOSITE_INPUT, COMPOSITE_PROGRESS_EVERY),
            Mode::Sequential => (SEQUENTIAL_INPUT, SEQUENTIAL_PROGRESS_EVERY),
        };
        Self {
            mode,
            input: PathBuf::from(input),
            output_dir: PathBuf::from(OUTPUT_DIR),
            column: TEXT_COLUMN.to_string(),
            progress_every,
            clean: false,
        }
    }

    /// Defaults, then the settings file (if any), then explicit overrides.
    #[must_use]
    pub fn resolve(mode: Mode, settings: Option<&UserSettings>, overrides: &ModeSettings) -> Self {
        let mut config = Self::new(mode);
        if let Some(settings) = settings {
            config.apply(settings.for_mode(mode));
        }
        config.apply(overrides);
        config
    }

    /// Overlay every field that is set in `settings`.
    pub fn apply(&mut self, settings: &ModeSettings) {
        if let Some(input) = &settings.input {
            self.input.clone_from(input);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir.clone_from(output_dir);
        }
        if let Some(column) = &settings.column {
            self.column.clone_from(column);
        }
        if let Some(n) = settings.progress_every {
            self.progress_every = n;
        }
        if let Some(clean) = settings.clean {
            self.clean = clean;
        }
    }

    /// Ensure the output directory (and its parents) exists.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| JobDocsError::output_dir(&self.output_dir, e))
    }

    /// Whether a progress line is due after `n` units of work.
    #[must_use]
    pub fn progress_due(&self, n: usize) -> bool {
        self.progress_every > 0 && n % self.progress_every == 0
    }
}
