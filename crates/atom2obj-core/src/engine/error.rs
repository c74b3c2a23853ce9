use crate::core::io::error::FormatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("I/O error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot '{path}': {source}", path = path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl TranslateError {
    /// The format error behind this failure, if the input itself was at fault.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }
}
