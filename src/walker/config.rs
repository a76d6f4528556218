//! Configuration types for the file walker

use crate::language::Language;

/// Configuration for collecting and scanning files.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include hidden and ignored files (skip .gitignore filtering)
    pub show_all: bool,
    /// Descend at most this many directory levels below each root
    pub max_depth: Option<usize>,
    /// File or directory names (or glob patterns) to skip
    pub ignore_patterns: Vec<String>,
    /// Scan every file as this language. While walking directories, only
    /// files of this language are collected.
    pub language: Option<Language>,
    /// Number of parallel workers for extraction.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}
