//! Error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A block comment was opened but never closed before the end of input.
///
/// This is the only way a scan can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unterminated block comment starting on line {line}")]
pub struct UnterminatedCommentError {
    /// Line of the unmatched opening delimiter (1-indexed)
    pub line: usize,
}

/// Errors raised while extracting comments from files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot infer language of '{}'; use --language", path.display())]
    UnsupportedLanguage { path: PathBuf },

    #[error("'{}' is {size} bytes, over the {limit} byte limit", path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: UnterminatedCommentError,
    },

    #[error("invalid --matching pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    /// File the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Io { path, .. }
            | Error::UnsupportedLanguage { path }
            | Error::FileTooLarge { path, .. }
            | Error::Scan { path, .. } => Some(path.as_path()),
            Error::InvalidPattern(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_message() {
        let err = UnterminatedCommentError { line: 12 };
        assert_eq!(err.to_string(), "unterminated block comment starting on line 12");
    }

    #[test]
    fn test_scan_error_names_file() {
        let err = Error::Scan {
            path: PathBuf::from("src/main.ml"),
            source: UnterminatedCommentError { line: 3 },
        };
        assert_eq!(
            err.to_string(),
            "src/main.ml: unterminated block comment starting on line 3"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        let err = Error::Io {
            path: PathBuf::from("missing.erl"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("cannot read 'missing.erl'"));
        assert_eq!(err.path(), Some(Path::new("missing.erl")));
    }
}
