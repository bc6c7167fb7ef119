//! Readers that turn literate documents into chunk tables.

mod block;
mod indented;

use std::path::Path;

use crate::config::Dialect;
use crate::errors::Result;
use crate::model::ChunkTable;

pub use block::parse_block;
pub use indented::{classify, parse_indented, LineKind};

/// Parses a document with the given dialect.
pub fn parse_document(input: &str, dialect: Dialect, source_path: Option<&Path>) -> ChunkTable {
    let mut table = match dialect {
        Dialect::Indented => parse_indented(input),
        Dialect::Block => parse_block(input),
    };

    if let Some(path) = source_path {
        table.set_filename(path);
    }

    tracing::debug!(%dialect, chunks = table.len(), "parsed document");
    table
}

/// Reads a document file and parses it.
pub fn read_document_file(path: &Path, dialect: Dialect) -> Result<ChunkTable> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_document(&content, dialect, Some(path)))
}
