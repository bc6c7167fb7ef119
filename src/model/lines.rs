//! Line and indentation helpers shared by the readers and the expander.

/// Number of leading space columns that mark a program line.
pub const CODE_INDENT: usize = 4;

/// Splits text into lines, keeping each line's `\n` terminator.
///
/// The last line has no terminator when the text does not end in a newline.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Removes a trailing `\n` (and a preceding `\r`, if any).
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Strips exactly `columns` leading spaces, or returns `None` if the line has
/// fewer. Tabs never count as indentation.
pub fn strip_columns(line: &str, columns: usize) -> Option<&str> {
    let prefix = line.as_bytes().get(..columns)?;
    if prefix.iter().all(|&b| b == b' ') {
        Some(&line[columns..])
    } else {
        None
    }
}

/// Prepends `prefix` to every line of `text`.
///
/// Nothing is added after a final trailing newline, so the result never ends
/// in a dangling indented empty line.
pub fn indent_lines(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + prefix.len() * 8);
    for line in split_lines(text) {
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines: Vec<_> = split_lines("a\nb\nc").collect();
        assert_eq!(lines, vec!["a\n", "b\n", "c"]);

        let lines: Vec<_> = split_lines("a\n\n").collect();
        assert_eq!(lines, vec!["a\n", "\n"]);

        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("@\n"), "@");
        assert_eq!(strip_terminator("@\r\n"), "@");
        assert_eq!(strip_terminator("@"), "@");
    }

    #[test]
    fn test_strip_columns() {
        assert_eq!(strip_columns("    x = 1\n", 4), Some("x = 1\n"));
        assert_eq!(strip_columns("      x\n", 4), Some("  x\n"));
        assert_eq!(strip_columns("    \n", 4), Some("\n"));
        assert_eq!(strip_columns("   x\n", 4), None);
        assert_eq!(strip_columns("\tx\n", 4), None);
        assert_eq!(strip_columns("  \t x\n", 4), None);
        assert_eq!(strip_columns("", 4), None);
    }

    #[test]
    fn test_indent_lines() {
        assert_eq!(indent_lines("a\nb\n", "    "), "    a\n    b\n");
        assert_eq!(indent_lines("a\nb", "  "), "  a\n  b");
        assert_eq!(indent_lines("a\n\nb\n", "> "), "> a\n> \n> b\n");
        assert_eq!(indent_lines("", "    "), "");
        assert_eq!(indent_lines("a\n", ""), "a\n");
    }
}
