use crate::reader::parse::ParseFailure;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open log file {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log source")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no entries remain in the log source")]
    Exhausted,
}

impl ReaderError {
    pub fn source_unavailable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn read(source: std::io::Error) -> Self {
        Self::Read { source }
    }
}

/// A line that does not fit the `year month day hour` layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {failure}: {text:?}")]
pub struct ParseError {
    /// 1-based line number in the source, blank lines included.
    pub line: usize,
    pub text: String,
    // shown in the message, so not also exposed as the error source
    pub failure: ParseFailure,
}
