//! Collecting source files and extracting their comments in parallel
//!
//! Extraction happens in two phases: the walker first collects every file
//! under the requested roots in a stable order, then scans them on a rayon
//! pool. Results come back in collection order whatever the worker count.

mod config;
mod utils;

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::extract::{FileComments, extract_comments};
use crate::language::Language;

pub use config::WalkerConfig;
pub use utils::{glob_match, should_ignore_path};

/// Outcome of scanning a single file.
pub type FileResult = Result<FileComments>;

pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect and scan every file under `roots`.
    pub fn run(&self, roots: &[PathBuf]) -> Result<Vec<FileResult>> {
        let files = self.collect_files(roots)?;
        Ok(self.extract(&files))
    }

    /// Collect the files to scan, in a stable order.
    ///
    /// Files named directly are always kept. Files found by walking a
    /// directory are kept only if their language is known (and matches the
    /// configured language, if any). A root that does not exist is an error.
    pub fn collect_files(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            if root.is_file() {
                files.push(root.clone());
            } else if root.is_dir() {
                self.walk_dir(root, &mut files);
            } else {
                return Err(Error::Io {
                    path: root.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                });
            }
        }
        debug!(count = files.len(), "collected files");
        Ok(files)
    }

    fn walk_dir(&self, root: &Path, files: &mut Vec<PathBuf>) {
        let respect_ignores = !self.config.show_all;
        let patterns = self.config.ignore_patterns.clone();

        let walker = WalkBuilder::new(root)
            .hidden(respect_ignores)
            .ignore(respect_ignores)
            .git_ignore(respect_ignores)
            .git_global(respect_ignores)
            .git_exclude(respect_ignores)
            .require_git(false)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0 || !should_ignore_path(entry.path(), &patterns)
            })
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|t| t.is_file());
                    if is_file && self.accepts(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => warn!("skipping entry: {}", e),
            }
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        match (self.config.language, Language::from_path(path)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(wanted), Some(found)) => wanted == found,
        }
    }

    /// Scan `files`, in parallel unless configured for a single worker.
    pub fn extract(&self, files: &[PathBuf]) -> Vec<FileResult> {
        let language = self.config.language;

        match self.config.parallel_workers {
            1 => files
                .iter()
                .map(|path| extract_comments(path, language))
                .collect(),
            0 => files
                .par_iter()
                .map(|path| extract_comments(path, language))
                .collect(),
            workers => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(|| {
                    files
                        .par_iter()
                        .map(|path| extract_comments(path, language))
                        .collect()
                }),
                Err(e) => {
                    // Fall back to rayon's global pool
                    warn!("cannot build a pool of {} workers: {}", workers, e);
                    files
                        .par_iter()
                        .map(|path| extract_comments(path, language))
                        .collect()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Comment;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_collects_known_languages_in_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.erl", "% b");
        write(dir.path(), "a.ml", "(* a *)");
        write(dir.path(), "notes.txt", "% ignored");
        write(dir.path(), "sub/c.lisp", "; c");

        let walker = Walker::new(WalkerConfig::default());
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&files, dir.path()), ["a.ml", "b.erl", "sub/c.lisp"]);
    }

    #[test]
    fn test_language_filter_while_walking() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.ml", "(* a *)");
        write(dir.path(), "b.erl", "% b");

        let walker = Walker::new(WalkerConfig {
            language: Some(Language::Erlang),
            ..Default::default()
        });
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&files, dir.path()), ["b.erl"]);
    }

    #[test]
    fn test_explicit_file_is_always_kept() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "notes.txt", "% kept");

        let walker = Walker::new(WalkerConfig::default());
        assert_eq!(walker.collect_files(&[path.clone()]).unwrap(), [path]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let walker = Walker::new(WalkerConfig::default());
        let err = walker
            .collect_files(&[PathBuf::from("/nonexistent/dir")])
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/a.erl", "% a");
        write(dir.path(), "_build/b.erl", "% b");
        write(dir.path(), "src/c_SUITE.erl", "% c");

        let walker = Walker::new(WalkerConfig {
            ignore_patterns: vec!["_build".to_string(), "*_SUITE.erl".to_string()],
            ..Default::default()
        });
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&files, dir.path()), ["src/a.erl"]);
    }

    #[test]
    fn test_gitignore_respected_unless_show_all() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".gitignore", "gen/\n");
        write(dir.path(), "gen/x.hs", "-- x");
        write(dir.path(), "y.hs", "-- y");

        let walker = Walker::new(WalkerConfig::default());
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&files, dir.path()), ["y.hs"]);

        let walker = Walker::new(WalkerConfig {
            show_all: true,
            ..Default::default()
        });
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&files, dir.path()), ["gen/x.hs", "y.hs"]);
    }

    #[test]
    fn test_max_depth() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "top.erl", "% top");
        write(dir.path(), "a/deep.erl", "% deep");

        let walker = Walker::new(WalkerConfig {
            max_depth: Some(1),
            ..Default::default()
        });
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(names(&files, dir.path()), ["top.erl"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = TempDir::new().unwrap();
        for i in 0..20 {
            write(dir.path(), &format!("m{:02}.erl", i), &format!("% module {}\n", i));
        }
        write(dir.path(), "broken.ml", "(* open");
        let roots = [dir.path().to_path_buf()];

        let summarize = |results: Vec<FileResult>| -> Vec<Option<Vec<Comment>>> {
            results.into_iter().map(|r| r.ok().map(|f| f.comments)).collect()
        };

        let mut outputs = Vec::new();
        for workers in [1, 0, 3] {
            let walker = Walker::new(WalkerConfig {
                parallel_workers: workers,
                ..Default::default()
            });
            outputs.push(summarize(walker.run(&roots).unwrap()));
        }
        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[0], outputs[2]);
        assert_eq!(outputs[0].len(), 21);
        assert!(outputs[0][0].is_none(), "broken.ml sorts first and fails");
        assert_eq!(
            outputs[0][1],
            Some(vec![Comment::single(" module 0", 1)])
        );
    }
}
