//! File-level comment extraction
//!
//! Glue between the outside world and [`crate::scanner`]: picks the rule-set
//! for a file's language, reads the file and wraps the scan result.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::comment::Comment;
use crate::error::{Error, Result, UnterminatedCommentError};
use crate::file_utils::read_source_file;
use crate::language::Language;
use crate::scanner::scan;

/// All comments found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileComments {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub language: Language,
    pub comments: Vec<Comment>,
}

/// Serialize a path as text, replacing bytes that are not valid UTF-8.
fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

/// Extract comments from code already held in memory.
///
/// # Examples
///
/// ```
/// use gleaner::{extract_comments_from_str, Comment, Language};
///
/// let comments = extract_comments_from_str("#| a |# ; b", Language::Lisp).unwrap();
/// assert_eq!(comments, [Comment::block(" a ", 1), Comment::single(" b", 1)]);
/// ```
pub fn extract_comments_from_str(
    code: &str,
    language: Language,
) -> std::result::Result<Vec<Comment>, UnterminatedCommentError> {
    scan(code, language.rules())
}

/// Extract comments from a file.
///
/// The language is inferred from the file extension unless given.
pub fn extract_comments(path: &Path, language: Option<Language>) -> Result<FileComments> {
    let language = language
        .or_else(|| Language::from_path(path))
        .ok_or_else(|| Error::UnsupportedLanguage {
            path: path.to_path_buf(),
        })?;
    trace!(path = %path.display(), %language, "reading");

    let code = read_source_file(path)?;
    let comments = extract_comments_from_str(&code, language).map_err(|source| Error::Scan {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = comments.len(), "extracted comments");

    Ok(FileComments {
        path: path.to_path_buf(),
        language,
        comments,
    })
}
