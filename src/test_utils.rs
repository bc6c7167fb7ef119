//! Shared test utilities.

use crate::model::{ChunkName, ChunkTable};
use crate::text_location::TextLocation;

/// Builds a chunk table from `(name, text)` sections, one line apart.
pub fn make_table(sections: &[(&str, &str)]) -> ChunkTable {
    let mut table = ChunkTable::new();
    for (line, (name, text)) in sections.iter().enumerate() {
        let name = ChunkName::new(*name);
        table.start_section(&name, TextLocation::line_only(line + 1));
        table.append(&name, text);
    }
    table
}
