//! Selecting which comments to report

use regex::Regex;

use crate::comment::Comment;
use crate::error::Result;
use crate::extract::FileComments;

/// Which kinds of comments to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    /// Line comments only
    SingleLine,
    /// Block comments only
    Multiline,
}

/// Filter applied to extracted comments before output.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    pub kind: KindFilter,
    /// Keep only comments whose text matches this pattern
    pub pattern: Option<Regex>,
}

impl CommentFilter {
    /// Build a filter, compiling `pattern` if given.
    pub fn new(kind: KindFilter, pattern: Option<&str>) -> Result<Self> {
        let pattern = pattern.map(Regex::new).transpose()?;
        Ok(Self { kind, pattern })
    }

    pub fn is_noop(&self) -> bool {
        self.kind == KindFilter::All && self.pattern.is_none()
    }

    pub fn matches(&self, comment: &Comment) -> bool {
        let kind_ok = match self.kind {
            KindFilter::All => true,
            KindFilter::SingleLine => !comment.multiline,
            KindFilter::Multiline => comment.multiline,
        };
        kind_ok
            && self
                .pattern
                .as_ref()
                .is_none_or(|re| re.is_match(&comment.text))
    }

    /// Drop the comments of `file` that don't match.
    pub fn apply(&self, mut file: FileComments) -> FileComments {
        if !self.is_noop() {
            file.comments.retain(|c| self.matches(c));
        }
        file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::language::Language;
    use std::path::PathBuf;

    fn sample() -> FileComments {
        FileComments {
            path: PathBuf::from("a.lisp"),
            language: Language::Lisp,
            comments: vec![
                Comment::single(" TODO: fix", 1),
                Comment::block(" license ", 2),
                Comment::single(" plain", 5),
            ],
        }
    }

    #[test]
    fn test_default_keeps_everything() {
        let filter = CommentFilter::default();
        assert!(filter.is_noop());
        assert_eq!(filter.apply(sample()).comments.len(), 3);
    }

    #[test]
    fn test_kind_filters() {
        let single = CommentFilter::new(KindFilter::SingleLine, None).unwrap();
        let lines: Vec<usize> = single.apply(sample()).comments.iter().map(|c| c.line).collect();
        assert_eq!(lines, [1, 5]);

        let multi = CommentFilter::new(KindFilter::Multiline, None).unwrap();
        assert_eq!(multi.apply(sample()).comments, [Comment::block(" license ", 2)]);
    }

    #[test]
    fn test_pattern_filter() {
        let filter = CommentFilter::new(KindFilter::All, Some(r"TODO|license")).unwrap();
        let lines: Vec<usize> = filter.apply(sample()).comments.iter().map(|c| c.line).collect();
        assert_eq!(lines, [1, 2]);
    }

    #[test]
    fn test_kind_and_pattern_combine() {
        let filter = CommentFilter::new(KindFilter::SingleLine, Some("license")).unwrap();
        assert!(filter.apply(sample()).comments.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = CommentFilter::new(KindFilter::All, Some("(unclosed")).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
