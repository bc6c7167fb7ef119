//! Reader for `<<NAME>>=` ... `@` block documents.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::lines::{split_lines, strip_terminator};
use crate::model::{ChunkName, ChunkTable};
use crate::text_location::TextLocation;

/// Opening line of a block: `<<NAME>>=` at the start of the line.
static OPEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<<(?P<name>.*)>>=$").unwrap());

/// Closing line of a block.
const CLOSE_MARKER: &str = "@";

/// Parses a block document into a chunk table.
///
/// Block contents are copied verbatim. Reopening a name appends to it; a
/// block still open at end of input ends there.
pub fn parse_block(input: &str) -> ChunkTable {
    let mut table = ChunkTable::new();
    let mut open: Option<ChunkName> = None;
    let mut pending_section: Option<TextLocation> = None;

    for (index, line) in split_lines(input).enumerate() {
        let content = strip_terminator(line);

        let Some(name) = &open else {
            if let Some(caps) = OPEN_PATTERN.captures(content) {
                let name = ChunkName::new(&caps["name"]);
                tracing::debug!(line = index + 1, chunk = %name, "opening block");
                open = Some(name);
                pending_section = Some(TextLocation::line_only(index + 2));
            }
            continue;
        };

        if content == CLOSE_MARKER {
            open = None;
            pending_section = None;
            continue;
        }

        if let Some(location) = pending_section.take() {
            table.start_section(name, location);
        }
        table.append(name, line);
    }

    if let Some(name) = open {
        tracing::debug!(chunk = %name, "block left open at end of input");
    }

    table
}
