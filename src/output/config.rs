//! Output configuration types

use crate::filter::CommentFilter;

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `path:line: text` lines, colored when enabled
    #[default]
    Text,
    /// A single pretty-printed JSON array
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub format: OutputFormat,
    /// Comments not matching this filter are not printed
    pub filter: CommentFilter,
    /// Print the "N comments in M files" trailer (text only)
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            format: OutputFormat::Text,
            filter: CommentFilter::default(),
            summary: true,
        }
    }
}
