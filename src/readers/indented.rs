//! Reader for indentation-delimited documents.
//!
//! Lines indented at least four spaces are program text; everything else is
//! commentary. A program-level line of the form `(in NAME)` redirects the
//! following program lines to chunk `NAME`:
//!
//! ```text
//! The entry point prints a greeting.
//!
//!     def main():
//!         <<greeting>>
//!
//! The greeting itself:
//!
//!     (in greeting)
//!     print("hello")
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::lines::{split_lines, strip_columns, CODE_INDENT};
use crate::model::{ChunkName, ChunkTable};
use crate::text_location::TextLocation;

/// A sufficiently indented `(in NAME)` line.
static SWITCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {4,}\(in (?P<name>.+)\)\s*$").unwrap());

/// How a single input line is treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Switch the current chunk.
    Switch(ChunkName),
    /// Program text with the code indentation removed.
    Code(&'a str),
    /// Prose, ignored.
    Commentary,
}

/// Classifies one line (terminator included).
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = SWITCH_PATTERN.captures(line) {
        return LineKind::Switch(ChunkName::new(&caps["name"]));
    }
    match strip_columns(line, CODE_INDENT) {
        Some(code) => LineKind::Code(code),
        None => LineKind::Commentary,
    }
}

/// Parses an indented document into a chunk table.
pub fn parse_indented(input: &str) -> ChunkTable {
    let mut table = ChunkTable::new();
    let mut current = ChunkName::default_chunk();
    let mut in_section = false;

    for (index, line) in split_lines(input).enumerate() {
        match classify(line) {
            LineKind::Switch(name) => {
                tracing::debug!(line = index + 1, chunk = %name, "switching chunk");
                current = name;
                in_section = false;
            }
            LineKind::Code(code) => {
                if !in_section {
                    table.start_section(&current, TextLocation::line_only(index + 1));
                    in_section = true;
                }
                table.append(&current, code);
            }
            LineKind::Commentary => in_section = false,
        }
    }

    table
}
