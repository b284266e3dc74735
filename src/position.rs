//! Offset to line/column mapping over the raw source text.
//!
//! Offsets and columns count `char`s, not bytes. Lines are split on `'\n'`
//! only; a `'\r'` before the newline is treated as part of the line.

/// Where an offset lands in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// 1-indexed line number
    pub line: usize,
    /// 1-indexed column, relative to the line start
    pub column: usize,
    /// The character at the offset, if the offset is inside the source
    pub error_char: Option<char>,
}

/// How a parser counts columns within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnUnit {
    Char,
    /// UTF-8 bytes (serde_json reports columns this way)
    Byte,
}

/// Resolve a char offset into a (line, column, char) triple.
///
/// A position sitting on a line's trailing newline resolves to one past the
/// last character of that line, not to the start of the next one. Positions
/// past the end of the source fall back to just past the end of the last line.
pub fn resolve(source: &str, position: usize) -> Resolved {
    let error_char = source.chars().nth(position);

    let mut line_start = 0usize;
    let mut last = (1usize, 0usize);

    for (index, line) in source.split('\n').enumerate() {
        let len = line.chars().count();
        if position >= line_start && position <= line_start + len {
            return Resolved {
                line: index + 1,
                column: (position - line_start + 1).min(len + 1),
                error_char,
            };
        }
        last = (index + 1, len);
        line_start += len + 1;
    }

    // Only reachable when position exceeds the source length
    Resolved {
        line: last.0,
        column: last.1 + 1,
        error_char,
    }
}

/// Convert a 1-indexed (line, column) pair back into a char offset.
///
/// Columns past the end of the line clamp to the line end, and lines past the
/// end of the source clamp to the end of the source. Zero is read as 1.
pub fn offset_of(source: &str, line: usize, column: usize, unit: ColumnUnit) -> usize {
    let line = line.max(1);
    let column = column.max(1);

    let mut line_start = 0usize;
    for (index, text) in source.split('\n').enumerate() {
        let len = text.chars().count();
        if index + 1 == line {
            let within = match unit {
                ColumnUnit::Char => column - 1,
                ColumnUnit::Byte => chars_in_byte_prefix(text, column - 1),
            };
            return line_start + within.min(len);
        }
        line_start += len + 1;
    }

    // Requested line is past the end: point at the end of the source
    line_start.saturating_sub(1)
}

/// Count the chars that start within the first `bytes` bytes of `text`
fn chars_in_byte_prefix(text: &str, bytes: usize) -> usize {
    text.char_indices()
        .take_while(|(offset, _)| *offset < bytes)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line_col(source: &str, position: usize) -> (usize, usize) {
        let r = resolve(source, position);
        (r.line, r.column)
    }

    #[test]
    fn test_resolve_empty_source() {
        assert_eq!(line_col("", 0), (1, 1));
        assert_eq!(line_col("", 7), (1, 1));
        assert_eq!(resolve("", 0).error_char, None);
    }

    #[test]
    fn test_resolve_newline_belongs_to_previous_line() {
        let r = resolve("ab\ncd", 2);
        assert_eq!((r.line, r.column), (1, 3));
        assert_eq!(r.error_char, Some('\n'));

        let r = resolve("ab\ncd", 3);
        assert_eq!((r.line, r.column), (2, 1));
        assert_eq!(r.error_char, Some('c'));
    }

    #[test]
    fn test_resolve_out_of_range_falls_back_to_last_line() {
        let r = resolve("abc", 10);
        assert_eq!((r.line, r.column), (1, 4));
        assert_eq!(r.error_char, None);

        assert_eq!(line_col("a\nbcd\n", 99), (3, 1));
        assert_eq!(line_col("a\nbcd", usize::MAX), (2, 4));
    }

    #[test]
    fn test_resolve_end_of_source() {
        let r = resolve("abc", 3);
        assert_eq!((r.line, r.column), (1, 4));
        assert_eq!(r.error_char, None);
    }

    #[test]
    fn test_resolve_stays_within_bounds() {
        let source = "{\n  \"a\": [1, 2,\n\n  ]\n}";
        let line_count = source.split('\n').count();
        for position in 0..=source.chars().count() {
            let (line, column) = line_col(source, position);
            assert!(line >= 1 && line <= line_count, "line {} at {}", line, position);
            assert!(column >= 1, "column {} at {}", column, position);
        }
    }

    #[test]
    fn test_resolve_counts_chars_not_bytes() {
        let r = resolve("{\"é\":}", 5);
        assert_eq!((r.line, r.column), (1, 6));
        assert_eq!(r.error_char, Some('}'));
    }

    #[test]
    fn test_offset_of_chars() {
        assert_eq!(offset_of("ab\ncd", 2, 1, ColumnUnit::Char), 3);
        assert_eq!(offset_of("ab\ncd", 1, 3, ColumnUnit::Char), 2);
        // Clamped to the end of the line
        assert_eq!(offset_of("ab\ncd", 1, 40, ColumnUnit::Char), 2);
        // Past the last line
        assert_eq!(offset_of("ab\ncd", 9, 1, ColumnUnit::Char), 5);
        assert_eq!(offset_of("", 3, 3, ColumnUnit::Char), 0);
        assert_eq!(offset_of("abc", 0, 0, ColumnUnit::Char), 0);
    }

    #[test]
    fn test_offset_of_bytes() {
        // "é" is two bytes; byte column 7 is the closing brace
        let source = "{\"é\":}";
        let position = offset_of(source, 1, 7, ColumnUnit::Byte);
        assert_eq!(position, 5);
        assert_eq!(resolve(source, position).error_char, Some('}'));
    }
}
