// SPDX-License-Identifier: GPL-3.0-only
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExploderError>;

#[derive(thiserror::Error, Debug)]
pub enum ExploderError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read archive {label}: {source}")]
    Archive {
        label: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Module {module} has no resource named '{resource}'")]
    ResourceNotFound { module: String, resource: String },

    #[error("Invalid module manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Embedded resource '{resource}' does not name a usable package folder")]
    InvalidFolderName { resource: String },

    #[error("{} package(s) failed to explode: {}", .failures.len(), summarize(.failures))]
    Batch {
        /// Directories of every package zip, failed ones included
        directories: Vec<PathBuf>,
        failures: Vec<(PathBuf, ExploderError)>,
    },
}

impl ExploderError {
    /// Attach the offending path to a raw I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn archive(label: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            label: label.into(),
            source,
        }
    }
}

fn summarize(failures: &[(PathBuf, ExploderError)]) -> String {
    failures
        .iter()
        .map(|(path, error)| format!("{} ({})", path.display(), error))
        .collect::<Vec<_>>()
        .join("; ")
}
