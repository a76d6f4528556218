//! Declarative comment and string syntax for each supported language
//!
//! A [`RuleSet`] only describes syntax; all matching is done by
//! [`crate::scanner`]. Rule-sets are `'static` constants, so a single value can
//! be shared by any number of concurrent scans.

/// A string literal opened and closed by the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRule {
    pub delimiter: char,
    /// Character that escapes the next character inside the literal, if any.
    pub escape: Option<char>,
}

impl StringRule {
    /// A literal with backslash escapes, e.g. `"a \" b"`.
    pub const fn escaped(delimiter: char) -> Self {
        Self {
            delimiter,
            escape: Some('\\'),
        }
    }

    /// A literal where every character up to the next delimiter is content.
    pub const fn raw(delimiter: char) -> Self {
        Self {
            delimiter,
            escape: None,
        }
    }
}

/// A comment that runs from its marker to the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCommentRule {
    pub marker: &'static str,
    /// Strip a whole run of markers (`%%`, `;;;`) rather than just the first.
    pub repeatable: bool,
    /// The marker only counts at the start of a word: at the start of input,
    /// after whitespace or after one of [`WORD_BREAKS`].
    pub word_start: bool,
}

/// Characters after which a `word_start` marker still begins a comment.
pub const WORD_BREAKS: &str = ";&|()<>";

/// A comment between an opening and a closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCommentRule {
    pub open: &'static str,
    pub close: &'static str,
    /// Whether an opening delimiter inside an open comment must be closed
    /// separately. Without nesting, the first closing delimiter wins.
    pub nesting: bool,
}

/// Complete comment syntax of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Tokens skipped as plain code before anything else is tried. These are
    /// character literals holding a quote or a comment marker, and operators
    /// spelled like a comment opener.
    pub verbatim: &'static [&'static str],
    pub strings: &'static [StringRule],
    pub line_comment: Option<LineCommentRule>,
    pub block_comment: Option<BlockCommentRule>,
}

const DOUBLE_QUOTED: &[StringRule] = &[StringRule::escaped('"')];

/// `'"'` and `'\"'` character literals.
const QUOTE_CHAR: &[&str] = &["'\"'", "'\\\"'"];

/// Erlang: `%` line comments only.
pub const ERLANG: RuleSet = RuleSet {
    verbatim: &["$\\\"", "$\"", "$%"],
    strings: DOUBLE_QUOTED,
    line_comment: Some(LineCommentRule {
        marker: "%",
        repeatable: true,
        word_start: false,
    }),
    block_comment: None,
};

/// Common Lisp and friends: `;` line comments and `#| |#` blocks.
pub const LISP: RuleSet = RuleSet {
    verbatim: &["#\\\"", "#\\;"],
    strings: DOUBLE_QUOTED,
    line_comment: Some(LineCommentRule {
        marker: ";",
        repeatable: true,
        word_start: false,
    }),
    block_comment: Some(BlockCommentRule {
        open: "#|",
        close: "|#",
        nesting: false,
    }),
};

/// OCaml: `(* *)` is the only comment form.
pub const OCAML: RuleSet = RuleSet {
    verbatim: QUOTE_CHAR,
    strings: DOUBLE_QUOTED,
    line_comment: None,
    block_comment: Some(BlockCommentRule {
        open: "(*",
        close: "*)",
        nesting: false,
    }),
};

/// F#: OCaml block comments plus `//` line comments. `(*)` is the
/// multiplication operator.
pub const FSHARP: RuleSet = RuleSet {
    verbatim: &["'\"'", "'\\\"'", "(*)"],
    strings: DOUBLE_QUOTED,
    line_comment: Some(LineCommentRule {
        marker: "//",
        repeatable: false,
        word_start: false,
    }),
    block_comment: OCAML.block_comment,
};

/// Haskell: `--` line comments and nesting `{- -}` blocks.
pub const HASKELL: RuleSet = RuleSet {
    verbatim: QUOTE_CHAR,
    strings: DOUBLE_QUOTED,
    line_comment: Some(LineCommentRule {
        marker: "--",
        repeatable: false,
        word_start: false,
    }),
    block_comment: Some(BlockCommentRule {
        open: "{-",
        close: "-}",
        nesting: true,
    }),
};

/// C, C++, Java and other languages using `//` and `/* */`.
pub const C_FAMILY: RuleSet = RuleSet {
    verbatim: &[],
    strings: &[StringRule::escaped('"'), StringRule::escaped('\'')],
    line_comment: Some(LineCommentRule {
        marker: "//",
        repeatable: false,
        word_start: false,
    }),
    block_comment: Some(BlockCommentRule {
        open: "/*",
        close: "*/",
        nesting: false,
    }),
};

/// Go: C comments, plus backquoted raw strings.
pub const GO: RuleSet = RuleSet {
    strings: &[
        StringRule::escaped('"'),
        StringRule::escaped('\''),
        StringRule::raw('`'),
    ],
    ..C_FAMILY
};

/// JavaScript and TypeScript: C comments, plus template literals.
pub const JAVASCRIPT: RuleSet = RuleSet {
    strings: &[
        StringRule::escaped('"'),
        StringRule::escaped('\''),
        StringRule::escaped('`'),
    ],
    ..C_FAMILY
};

/// POSIX shells: `#` line comments at the start of a word, single quotes
/// take no escapes.
pub const SHELL: RuleSet = RuleSet {
    verbatim: &[],
    strings: &[StringRule::escaped('"'), StringRule::raw('\'')],
    line_comment: Some(LineCommentRule {
        marker: "#",
        repeatable: true,
        word_start: true,
    }),
    block_comment: None,
};
