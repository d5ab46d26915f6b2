use std::io;
use thiserror::Error;

/// The three ways a load can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file is missing or could not be read
    FileAccess,
    /// The content is not valid JSON
    Parse,
    /// Valid JSON that does not have the keypoint file layout
    Schema,
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Could not read {origin}: {source}")]
    FileAccess {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unexpected layout in {origin}: {source}")]
    Schema {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Ragged coordinates in {origin}: record {index} has {found} values, expected {expected}")]
    RaggedCoordinates {
        origin: String,
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl LoaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoaderError::FileAccess { .. } => ErrorKind::FileAccess,
            LoaderError::Parse { .. } => ErrorKind::Parse,
            LoaderError::Schema { .. } | LoaderError::RaggedCoordinates { .. } => ErrorKind::Schema,
        }
    }

    /// Sorts a serde_json failure into the taxonomy. I/O errors surfaced
    /// through the reader count as file access failures.
    pub(crate) fn from_json(origin: &str, err: serde_json::Error) -> LoaderError {
        use serde_json::error::Category;
        let origin = origin.to_owned();
        match err.classify() {
            Category::Io => LoaderError::FileAccess {
                origin,
                source: err.into(),
            },
            Category::Syntax | Category::Eof => LoaderError::Parse {
                origin,
                source: err,
            },
            Category::Data => LoaderError::Schema {
                origin,
                source: err,
            },
        }
    }
}
