use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a table from being generated and written.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("unknown colormap `{name}` (known colormaps: {known})")]
    UnknownColorMap { name: String, known: String },

    #[error("sample count must be between 1 and {max}, got {count}")]
    InvalidSampleCount { count: usize, max: usize },

    #[error("invalid header layout: `{field}` cannot be {value:?}")]
    InvalidLayout { field: &'static str, value: String },

    #[error("unable to parse parameter file {path}: {source}")]
    ParamFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TableError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> TableError {
        TableError::Io {
            path: path.into(),
            source,
        }
    }
}
