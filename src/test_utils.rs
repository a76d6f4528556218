//! Test utilities for building temporary source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of source files.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a `.gitignore` at the root with one pattern per line.
    pub fn add_gitignore(&self, patterns: &[&str]) -> PathBuf {
        self.add_file(".gitignore", &format!("{}\n", patterns.join("\n")))
    }

    /// Fill the directory with `modules` Erlang and OCaml files spread over
    /// a few subdirectories, each carrying line and block comments.
    pub fn with_sources(modules: usize) -> Self {
        let repo = Self::new();
        for i in 0..modules {
            let dir = format!("lib{}", i % 4);
            repo.add_file(&format!("{}/mod{}.erl", dir, i), &erlang_module(i));
            repo.add_file(&format!("{}/mod{}.ml", dir, i), &ocaml_module(i));
        }
        repo
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// A small Erlang module with `%`-comments and a string containing `%`.
pub fn erlang_module(n: usize) -> String {
    format!(
        "%%% Module {n}\n-module(mod{n}).\n\n%% Formats a percentage\nfmt(X) ->\n    io_lib:format(\"~p% done\", [X]). % inline\n"
    )
}

/// A small OCaml module with block comments and a string containing `(*`.
pub fn ocaml_module(n: usize) -> String {
    format!(
        "(* Module {n}\n   spans lines *)\nlet banner = \"(* not a comment *)\"\nlet add a b = a + b (* trailing *)\n"
    )
}
