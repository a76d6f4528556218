//! Programming language detection and classification
//!
//! Maps file extensions and user-supplied names to a [`Language`], and each
//! language to the comment [`RuleSet`] the scanner runs with.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::rules::{self, RuleSet};

/// Languages whose comments can be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Erlang,
    Lisp,
    OCaml,
    FSharp,
    Haskell,
    C,
    Cpp,
    Java,
    JavaScript,
    Go,
    Shell,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 11] = [
        Language::Erlang,
        Language::Lisp,
        Language::OCaml,
        Language::FSharp,
        Language::Haskell,
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::JavaScript,
        Language::Go,
        Language::Shell,
    ];

    /// Detect language from a file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use gleaner::Language;
    ///
    /// assert_eq!(Language::from_extension("erl"), Some(Language::Erlang));
    /// assert_eq!(Language::from_extension("ML"), Some(Language::OCaml));
    /// assert_eq!(Language::from_extension("unknown"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "erl" | "hrl" | "escript" => Some(Language::Erlang),
            "lisp" | "lsp" | "cl" | "el" | "scm" | "ss" | "rkt" | "clj" | "cljs" | "cljc" => {
                Some(Language::Lisp)
            }
            "ml" | "mli" | "mll" | "mly" => Some(Language::OCaml),
            "fs" | "fsi" | "fsx" => Some(Language::FSharp),
            "hs" | "lhs" => Some(Language::Haskell),
            "c" | "h" => Some(Language::C),
            "cpp" | "cxx" | "cc" | "hpp" | "hxx" | "hh" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" | "mts" | "cts" => {
                Some(Language::JavaScript)
            }
            "go" => Some(Language::Go),
            "sh" | "bash" | "zsh" => Some(Language::Shell),
            _ => None,
        }
    }

    /// Detect language from a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use gleaner::Language;
    ///
    /// assert_eq!(Language::from_path(Path::new("src/app.erl")), Some(Language::Erlang));
    /// assert_eq!(Language::from_path(Path::new("README.md")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Parse a user-supplied language name (case-insensitive).
    ///
    /// Accepts canonical names, common aliases and file extensions.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        let by_name = match name.as_str() {
            "erlang" => Some(Language::Erlang),
            "lisp" | "common-lisp" | "scheme" | "clojure" | "elisp" => Some(Language::Lisp),
            "ocaml" => Some(Language::OCaml),
            "fsharp" | "f#" => Some(Language::FSharp),
            "haskell" => Some(Language::Haskell),
            "c" => Some(Language::C),
            "cpp" | "c++" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "javascript" | "typescript" => Some(Language::JavaScript),
            "go" | "golang" => Some(Language::Go),
            "shell" | "bash" | "zsh" => Some(Language::Shell),
            _ => None,
        };
        by_name.or_else(|| Self::from_extension(&name))
    }

    /// Comment syntax used when scanning this language.
    pub fn rules(&self) -> &'static RuleSet {
        match self {
            Language::Erlang => &rules::ERLANG,
            Language::Lisp => &rules::LISP,
            Language::OCaml => &rules::OCAML,
            Language::FSharp => &rules::FSHARP,
            Language::Haskell => &rules::HASKELL,
            Language::C | Language::Cpp | Language::Java => &rules::C_FAMILY,
            Language::JavaScript => &rules::JAVASCRIPT,
            Language::Go => &rules::GO,
            Language::Shell => &rules::SHELL,
        }
    }

    /// Returns the canonical file extension for this language.
    pub fn canonical_extension(&self) -> &'static str {
        match self {
            Language::Erlang => "erl",
            Language::Lisp => "lisp",
            Language::OCaml => "ml",
            Language::FSharp => "fs",
            Language::Haskell => "hs",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::JavaScript => "js",
            Language::Go => "go",
            Language::Shell => "sh",
        }
    }

    /// Returns the human-readable name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Erlang => "Erlang",
            Language::Lisp => "Lisp",
            Language::OCaml => "OCaml",
            Language::FSharp => "F#",
            Language::Haskell => "Haskell",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Go => "Go",
            Language::Shell => "Shell",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
