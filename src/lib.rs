//! Gleaner - Extract comments from source code without being fooled by strings
//!
//! The core is [`scan`], a single character scanner driven by a declarative
//! [`rules::RuleSet`] per language. Around it sit file extraction, a
//! parallel directory walker and output formatting for the `gleaner` binary.

pub mod comment;
pub mod error;
pub mod extract;
pub mod file_utils;
pub mod filter;
pub mod language;
pub mod line_index;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use comment::Comment;
pub use error::{Error, Result, UnterminatedCommentError};
pub use extract::{FileComments, extract_comments, extract_comments_from_str};
pub use filter::{CommentFilter, KindFilter};
pub use language::Language;
pub use line_index::LineIndex;
pub use output::{OutputConfig, OutputFormat, print_results};
pub use rules::RuleSet;
pub use scanner::scan;
pub use walker::{FileResult, Walker, WalkerConfig};
