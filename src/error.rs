use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobDocsError {
    #[error("source error in {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("write error for {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory error for {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl JobDocsError {
    /// Wrap a CSV failure with the path of the source being read.
    pub fn from_csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }

    /// Wrap an artifact write failure with the path being written.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Wrap a failure creating or scanning the output directory.
    pub fn output_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDir {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, JobDocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_path() {
        let err = JobDocsError::write(
            "out/job_1.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("write error for out/job_1.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn output_dir_error_names_path() {
        let err = JobDocsError::output_dir(
            "data/jobs/raw",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "output directory error for data/jobs/raw: denied"
        );
    }
}
