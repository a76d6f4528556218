//! Plain-text output formatter
//!
//! One record per line, `path:line: text`. Comments whose text spans several
//! lines get a `path:start-end:` header and their body indented below it.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::comment::Comment;
use crate::extract::FileComments;
use crate::language::Language;

const BODY_INDENT: &str = "    ";

pub struct TextFormatter<W: WriteColor> {
    out: W,
    use_color: bool,
    comments: usize,
    files: usize,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self {
            out,
            use_color,
            comments: 0,
            files: 0,
        }
    }

    fn set_color(&mut self, color: Color, bold: bool) -> io::Result<()> {
        if self.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
        }
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.use_color {
            self.out.reset()?;
        }
        Ok(())
    }

    fn write_location(&mut self, path: &str, comment: &Comment) -> io::Result<()> {
        self.set_color(Color::Magenta, false)?;
        write!(self.out, "{}", path)?;
        self.reset()?;
        write!(self.out, ":")?;

        self.set_color(Color::Green, false)?;
        let end = comment.end_line();
        if end > comment.line {
            write!(self.out, "{}-{}", comment.line, end)?;
        } else {
            write!(self.out, "{}", comment.line)?;
        }
        self.reset()?;
        write!(self.out, ":")
    }

    /// Write every comment of one file.
    pub fn write_file(&mut self, file: &FileComments) -> io::Result<()> {
        let path = file.path.display().to_string();
        for comment in &file.comments {
            self.write_location(&path, comment)?;
            if comment.text.contains('\n') {
                writeln!(self.out)?;
                for line in comment.text.lines().map(str::trim_end) {
                    if line.is_empty() {
                        writeln!(self.out)?;
                    } else {
                        writeln!(self.out, "{}{}", BODY_INDENT, line)?;
                    }
                }
            } else {
                writeln!(self.out, " {}", comment.text.trim())?;
            }
        }
        self.comments += file.comments.len();
        self.files += 1;
        Ok(())
    }

    /// Write the "N comments in M files" trailer.
    pub fn write_summary(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.set_color(Color::Cyan, false)?;
        write!(
            self.out,
            "{} {} in {} {}",
            self.comments,
            if self.comments == 1 { "comment" } else { "comments" },
            self.files,
            if self.files == 1 { "file" } else { "files" },
        )?;
        self.reset()?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write the table shown by `--list-languages`.
pub fn write_language_table<W: Write>(mut out: W) -> io::Result<()> {
    for language in Language::ALL {
        let rules = language.rules();
        let line = rules.line_comment.map(|l| l.marker).unwrap_or("-");
        let block = rules
            .block_comment
            .map(|b| {
                let nesting = if b.nesting { " (nesting)" } else { "" };
                format!("{} {}{}", b.open, b.close, nesting)
            })
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<12}{:<6}{:<6}{}",
            language.name(),
            language.canonical_extension(),
            line,
            block
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use termcolor::{Ansi, NoColor};

    fn file(comments: Vec<Comment>) -> FileComments {
        FileComments {
            path: PathBuf::from("src/app.erl"),
            language: Language::Erlang,
            comments,
        }
    }

    fn render(files: &[FileComments], summary: bool) -> String {
        let mut formatter = TextFormatter::new(NoColor::new(Vec::new()), false);
        for f in files {
            formatter.write_file(f).unwrap();
        }
        if summary {
            formatter.write_summary().unwrap();
        }
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_single_line_records() {
        let out = render(
            &[file(vec![
                Comment::single(" first", 1),
                Comment::block(" inline block ", 4),
            ])],
            false,
        );
        assert_eq!(out, "src/app.erl:1: first\nsrc/app.erl:4: inline block\n");
    }

    #[test]
    fn test_multiline_record_gets_range_and_indented_body() {
        let out = render(&[file(vec![Comment::block("\n  one\n  two\n", 2)])], false);
        assert_eq!(out, "src/app.erl:2-5:\n\n      one\n      two\n");
    }

    #[test]
    fn test_summary_counts() {
        let out = render(
            &[
                file(vec![Comment::single(" a", 1)]),
                file(vec![Comment::single(" b", 1), Comment::single(" c", 2)]),
            ],
            true,
        );
        assert!(out.ends_with("\n3 comments in 2 files\n"), "{}", out);

        let out = render(&[file(vec![Comment::single(" a", 1)])], true);
        assert!(out.ends_with("\n1 comment in 1 file\n"), "{}", out);
    }

    #[test]
    fn test_color_escapes_only_when_enabled() {
        let f = file(vec![Comment::single(" hi", 1)]);

        let mut plain = TextFormatter::new(Ansi::new(Vec::new()), false);
        plain.write_file(&f).unwrap();
        let plain = String::from_utf8(plain.into_inner().into_inner()).unwrap();
        assert!(!plain.contains('\x1b'));

        let mut colored = TextFormatter::new(Ansi::new(Vec::new()), true);
        colored.write_file(&f).unwrap();
        let colored = String::from_utf8(colored.into_inner().into_inner()).unwrap();
        assert!(colored.contains('\x1b'));
        assert!(colored.contains("src/app.erl"));
        assert!(colored.ends_with(" hi\n"));
    }

    #[test]
    fn test_language_table_lists_every_language() {
        let mut out = Vec::new();
        write_language_table(&mut out).unwrap();
        let table = String::from_utf8(out).unwrap();
        assert_eq!(table.lines().count(), Language::ALL.len());
        assert!(table.contains("Haskell"));
        assert!(table.contains("{- -} (nesting)"));
    }
}
