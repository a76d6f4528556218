//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::extract::FileComments;
use crate::walker::FileResult;

/// One element of the JSON output array.
///
/// Successful files serialize as `{path, language, comments}`, failed ones as
/// `{path, error}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonEntry<'a> {
    Ok(&'a FileComments),
    Err {
        path: Option<String>,
        error: String,
    },
}

impl<'a> From<&'a FileResult> for JsonEntry<'a> {
    fn from(result: &'a FileResult) -> Self {
        match result {
            Ok(file) => JsonEntry::Ok(file),
            Err(e) => JsonEntry::Err {
                path: e.path().map(|p| p.display().to_string()),
                error: e.to_string(),
            },
        }
    }
}

/// Render results as a pretty-printed JSON array.
pub fn to_json(results: &[FileResult]) -> serde_json::Result<String> {
    let entries: Vec<JsonEntry> = results.iter().map(JsonEntry::from).collect();
    serde_json::to_string_pretty(&entries)
}

/// Print results as pretty-printed JSON to stdout.
pub fn print_json(results: &[FileResult]) -> io::Result<()> {
    let json = to_json(results).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Comment;
    use crate::error::{Error, UnterminatedCommentError};
    use crate::language::Language;
    use std::path::PathBuf;

    #[test]
    fn test_json_shapes() {
        let results: Vec<FileResult> = vec![
            Ok(FileComments {
                path: PathBuf::from("a.erl"),
                language: Language::Erlang,
                comments: vec![Comment::single(" hi", 1)],
            }),
            Err(Error::Scan {
                path: PathBuf::from("b.ml"),
                source: UnterminatedCommentError { line: 4 },
            }),
        ];

        let value: serde_json::Value = serde_json::from_str(&to_json(&results).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0]["path"], "a.erl");
        assert_eq!(entries[0]["language"], "erlang");
        assert_eq!(entries[0]["comments"][0]["text"], " hi");
        assert_eq!(entries[0]["comments"][0]["line"], 1);
        assert_eq!(entries[0]["comments"][0]["multiline"], false);

        assert_eq!(entries[1]["path"], "b.ml");
        assert_eq!(
            entries[1]["error"],
            "b.ml: unterminated block comment starting on line 4"
        );
        assert!(entries[1].get("comments").is_none());
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_are_written_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"bad\xff.erl"));
        let results: Vec<FileResult> = vec![
            Ok(FileComments {
                path: path.clone(),
                language: Language::Erlang,
                comments: vec![],
            }),
            Err(Error::UnsupportedLanguage { path }),
        ];

        let value: serde_json::Value = serde_json::from_str(&to_json(&results).unwrap()).unwrap();
        assert_eq!(value[0]["path"], "bad\u{FFFD}.erl");
        assert_eq!(value[1]["path"], "bad\u{FFFD}.erl");
    }
}
