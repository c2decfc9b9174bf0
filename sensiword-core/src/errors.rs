//! errors.rs - Custom error types for the sensiword-core library.
//!
//! The matching engine itself never fails. Only the collaborators around it
//! (word-list sources and configuration files) can, and their failures are
//! described here.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `sensiword-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SensiwordError {
    #[error("Failed to read word list '{}': {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration '{}': {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid configuration:\n{0}")]
    InvalidConfig(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_error_names_the_path() {
        let err = SensiwordError::WordList {
            path: PathBuf::from("dict/words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("dict/words.txt"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: SensiwordError = io.into();
        assert!(matches!(err, SensiwordError::IoError(_)));
    }
}
