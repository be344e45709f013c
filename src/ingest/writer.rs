use std::path::{Path, PathBuf};

use crate::error::{JobDocsError, Result};

const ARTIFACT_PREFIX: &str = "job_";
const ARTIFACT_EXT: &str = ".txt";

/// `job_<id>.txt`, falling back to the running count when there is no id.
/// Characters outside `[A-Za-z0-9._-]` in the id become `_`.
#[must_use]
pub fn composite_file_name(job_id: Option<&str>, count: usize) -> String {
    match job_id {
        Some(id) if !id.is_empty() => format!("{ARTIFACT_PREFIX}{}{ARTIFACT_EXT}", sanitize_id(id)),
        _ => format!("{ARTIFACT_PREFIX}{count}{ARTIFACT_EXT}"),
    }
}

/// `job_NNNN.txt` with at least four zero-padded digits.
#[must_use]
pub fn sequential_file_name(row: usize) -> String {
    format!("{ARTIFACT_PREFIX}{row:04}{ARTIFACT_EXT}")
}

/// Whether a file name looks like one of our artifacts.
#[must_use]
pub fn is_artifact_name(name: &str) -> bool {
    name.len() > ARTIFACT_PREFIX.len() + ARTIFACT_EXT.len()
        && name.starts_with(ARTIFACT_PREFIX)
        && name.ends_with(ARTIFACT_EXT)
}

fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Writes artifacts into a single output directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Write `content` as the whole file, replacing any existing file.
    /// Goes through a temp file and a rename so readers never see a partial artifact.
    pub fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path_for(file_name);
        let temp_path = self.dir.join(format!(".{file_name}.tmp"));

        let written = std::fs::write(&temp_path, content)
            .and_then(|()| std::fs::rename(&temp_path, &path));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(JobDocsError::write(&path, e));
        }
        Ok(path)
    }

    /// Delete every `job_*.txt` regular file in the directory. Other files
    /// and subdirectories are left alone. Returns how many were removed.
    pub fn remove_stale(&self) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }

        let dir_err = |e| JobDocsError::output_dir(&self.dir, e);

        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir).map_err(dir_err)? {
            let entry = entry.map_err(dir_err)?;
            if !entry.file_type().map_err(dir_err)?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if name.to_str().is_some_and(is_artifact_name) {
                std::fs::remove_file(entry.path()).map_err(dir_err)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
