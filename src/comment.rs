//! Comment records produced by the scanner

use std::fmt;

use serde::Serialize;

/// A single comment found in source code.
///
/// Two comments are equal when their text, line and kind all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Comment {
    /// Comment content with the delimiters removed. Interior whitespace
    /// and newlines are kept verbatim.
    pub text: String,
    /// The line where the opening delimiter starts (1-indexed)
    pub line: usize,
    /// True when the comment was recognized by block comment rules,
    /// even if its content fits on one line.
    pub multiline: bool,
}

impl Comment {
    pub fn new(text: impl Into<String>, line: usize, multiline: bool) -> Self {
        Self {
            text: text.into(),
            line,
            multiline,
        }
    }

    /// Shorthand for a line comment.
    pub fn single(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, line, false)
    }

    /// Shorthand for a block comment.
    pub fn block(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, line, true)
    }

    /// Line on which the comment ends.
    pub fn end_line(&self) -> usize {
        self.line + self.text.matches('\n').count()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
