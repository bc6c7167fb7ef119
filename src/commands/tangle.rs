//! Tangle command implementation.

use std::io::Read;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::Result;
use crate::model::{expand_with, CycleDetector};

use super::read_table;

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Chunk to expand; the configured default when absent.
    pub chunk: Option<String>,
    /// Name of the input document, used in diagnostics.
    pub source_path: Option<PathBuf>,
}

/// Reads a whole document and returns the expansion of one chunk.
pub fn tangle<R: Read>(config: &Config, options: &TangleOptions, input: R) -> Result<String> {
    let table = read_table(config, input, options.source_path.as_deref())?;
    let start = config.start_chunk(options.chunk.as_deref());

    for missing in table.unresolved_references() {
        tracing::debug!(chunk = %missing, "referenced chunk is never defined");
    }
    if !table.contains(&start) {
        tracing::warn!(chunk = %start, "start chunk is not defined; output is empty");
    }

    tracing::debug!(chunk = %start, chunks = table.len(), "tangling");
    let mut detector = CycleDetector::with_max_depth(config.max_depth);
    expand_with(&table, &start, "", &mut detector)
}
