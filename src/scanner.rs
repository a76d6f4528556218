//! Comment scanning engine
//!
//! A single left-to-right pass over the code. At every position the scanner
//! tries, in order: a verbatim token, a string literal, a block comment and
//! a line comment. A
//! resolved token is consumed whole and never rescanned, so comment markers
//! inside strings and string quotes inside comments are both inert.
//!
//! Policies worth knowing:
//! - An unterminated string literal runs to the end of the input.
//! - Without nesting, the first closing delimiter ends a block comment, so
//!   `(* a (* b *) c *)` yields ` a (* b ` and leaves ` c *)` as plain code.
//! - A line comment's text stops before the `\n` (and a preceding `\r`).

use crate::comment::Comment;
use crate::error::UnterminatedCommentError;
use crate::line_index::LineIndex;
use crate::rules::{BlockCommentRule, LineCommentRule, RuleSet, StringRule, WORD_BREAKS};

/// Extract every comment from `code` using the given rule-set.
///
/// Comments are returned in source order. An opened but unclosed block
/// comment fails the whole scan; no partial result is returned.
///
/// # Examples
///
/// ```
/// use gleaner::{rules, scan, Comment};
///
/// let comments = scan("x = 1. % one\n%% two", &rules::ERLANG).unwrap();
/// assert_eq!(comments, [Comment::single(" one", 1), Comment::single(" two", 2)]);
///
/// assert!(scan("let x = 1 (* oops", &rules::OCAML).is_err());
/// ```
pub fn scan(code: &str, rules: &RuleSet) -> Result<Vec<Comment>, UnterminatedCommentError> {
    Scanner::new(code, rules).run()
}

/// Per-call scan state.
struct Scanner<'a> {
    code: &'a str,
    rules: &'a RuleSet,
    index: LineIndex,
    pos: usize,
    comments: Vec<Comment>,
}

impl<'a> Scanner<'a> {
    fn new(code: &'a str, rules: &'a RuleSet) -> Self {
        Self {
            code,
            rules,
            index: LineIndex::new(code),
            pos: 0,
            comments: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Comment>, UnterminatedCommentError> {
        let code = self.code;
        while self.pos < code.len() {
            let rest = &code[self.pos..];
            let block = self.rules.block_comment.filter(|b| rest.starts_with(b.open));
            let line = self
                .rules
                .line_comment
                .filter(|l| rest.starts_with(l.marker) && (!l.word_start || self.at_word_start()));

            if let Some(token) = self.rules.verbatim.iter().find(|t| rest.starts_with(**t)) {
                self.pos += token.len();
            } else if let Some(string) = self.string_at(rest) {
                self.pos = self.skip_string(string);
            } else if let Some(block) = block {
                self.read_block(block)?;
            } else if let Some(line) = line {
                self.read_line(line);
            } else {
                self.pos += next_char_len(rest);
            }
        }
        Ok(self.comments)
    }

    fn at_word_start(&self) -> bool {
        self.code[..self.pos]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_whitespace() || WORD_BREAKS.contains(c))
    }

    fn string_at(&self, rest: &str) -> Option<StringRule> {
        let first = rest.chars().next()?;
        self.rules
            .strings
            .iter()
            .find(|s| s.delimiter == first)
            .copied()
    }

    /// Returns the offset just past the closing delimiter, or the end of
    /// input for an unterminated literal.
    fn skip_string(&self, string: StringRule) -> usize {
        let body_start = self.pos + string.delimiter.len_utf8();
        let mut chars = self.code[body_start..].char_indices();
        while let Some((i, c)) = chars.next() {
            if Some(c) == string.escape {
                chars.next();
            } else if c == string.delimiter {
                return body_start + i + c.len_utf8();
            }
        }
        self.code.len()
    }

    fn read_block(&mut self, block: BlockCommentRule) -> Result<(), UnterminatedCommentError> {
        let code = self.code;
        let start = self.pos;
        let body_start = start + block.open.len();
        let body = &code[body_start..];

        let close_at = if block.nesting {
            find_nested_close(body, block)
        } else {
            body.find(block.close)
        };
        let Some(len) = close_at else {
            return Err(UnterminatedCommentError {
                line: self.index.line_number(start),
            });
        };

        self.push(start, &body[..len], true);
        self.pos = body_start + len + block.close.len();
        Ok(())
    }

    fn read_line(&mut self, line: LineCommentRule) {
        let code = self.code;
        let start = self.pos;
        let mut body_start = start + line.marker.len();
        if line.repeatable {
            while code[body_start..].starts_with(line.marker) {
                body_start += line.marker.len();
            }
        }

        let body_end = code[body_start..]
            .find('\n')
            .map_or(code.len(), |i| body_start + i);
        let text = &code[body_start..body_end];
        let text = text.strip_suffix('\r').unwrap_or(text);

        self.push(start, text, false);
        self.pos = body_end;
    }

    fn push(&mut self, start: usize, text: &str, multiline: bool) {
        let line = self.index.line_number(start);
        self.comments.push(Comment::new(text, line, multiline));
    }
}

/// Offset of the closing delimiter that balances the outermost open.
/// `body` starts right after that opening delimiter.
fn find_nested_close(body: &str, block: BlockCommentRule) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = 0;
    while i < body.len() {
        let rest = &body[i..];
        if rest.starts_with(block.close) {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
            i += block.close.len();
        } else if rest.starts_with(block.open) {
            depth += 1;
            i += block.open.len();
        } else {
            i += next_char_len(rest);
        }
    }
    None
}

fn next_char_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}
