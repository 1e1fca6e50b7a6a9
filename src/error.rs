//! Error types for the solver.
//!
//! Only a few things can actually go wrong: the word list may be unreadable,
//! an I/O stream may fail, or the solver may be configured with nonsense.
//! An unsolvable cryptogram is not an error; see [`crate::solver::Outcome`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptogramError {
    /// The word list could not be read.
    #[error("word source {} unavailable: {source}", path.display())]
    WordSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected solver or CLI configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CryptogramError>;

impl CryptogramError {
    pub fn word_source<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        CryptogramError::WordSourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        CryptogramError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_source_message_names_the_path() {
        let err = CryptogramError::word_source(
            "/nowhere/words",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/words"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_errors_convert() {
        let err: CryptogramError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, CryptogramError::Io(_)));
    }
}
