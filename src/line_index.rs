//! Byte offset to line number lookup

/// Sorted end-of-line offsets for a piece of source code.
///
/// Holds the byte position of every `\n` plus the end of the final line, so a
/// lookup is a binary search over the table.
#[derive(Debug, Clone)]
pub struct LineIndex {
    ends: Vec<usize>,
}

impl LineIndex {
    pub fn new(code: &str) -> Self {
        let mut ends: Vec<usize> = code
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();
        ends.push(code.len());
        Self { ends }
    }

    /// 1-indexed line number of the character at byte offset `pos`.
    ///
    /// A newline belongs to the line it terminates.
    pub fn line_number(&self, pos: usize) -> usize {
        self.ends.partition_point(|&end| end < pos) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let index = LineIndex::new("");
        assert_eq!(index.line_number(0), 1);
    }

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("abc");
        assert_eq!(index.line_number(0), 1);
        assert_eq!(index.line_number(2), 1);
        assert_eq!(index.line_number(3), 1);
    }

    #[test]
    fn test_newline_belongs_to_its_line() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.line_number(2), 1);
        assert_eq!(index.line_number(3), 2);
        assert_eq!(index.line_number(5), 2);
        assert_eq!(index.line_number(6), 3);
    }

    #[test]
    fn test_trailing_newlines() {
        let index = LineIndex::new("a\n\n\n");
        assert_eq!(index.line_number(2), 2);
        assert_eq!(index.line_number(3), 3);
        assert_eq!(index.line_number(4), 4);
    }

    #[test]
    fn test_leading_newline() {
        let index = LineIndex::new("\nx");
        assert_eq!(index.line_number(0), 1);
        assert_eq!(index.line_number(1), 2);
    }
}
