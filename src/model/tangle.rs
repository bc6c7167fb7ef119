//! Recursive expansion of chunk references.

use crate::errors::{KnotError, Result};

use super::chunk_name::ChunkName;
use super::chunk_table::ChunkTable;
use super::lines::{indent_lines, split_lines};
use super::reference::Reference;

/// Default limit on the number of chunks on one expansion path.
pub const MAX_DEPTH: usize = 512;

/// Tracks the chunks on the current expansion path.
///
/// Only the path matters: a chunk referenced twice by siblings is fine, a
/// chunk that reaches itself is not. The path length is capped so that a
/// long acyclic chain fails cleanly instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    stack: Vec<ChunkName>,
    max_depth: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }
}

impl CycleDetector {
    /// Creates a new cycle detector with the default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cycle detector allowing at most `max_depth` nested chunks.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            stack: Vec::new(),
            max_depth,
        }
    }

    /// Enters a chunk, failing if it is already on the path or the path is
    /// full.
    pub fn enter(&mut self, name: &ChunkName) -> Result<()> {
        if self.depth() >= self.max_depth {
            return Err(KnotError::DepthExceeded {
                name: name.clone(),
                limit: self.max_depth,
            });
        }
        if self.stack.contains(name) {
            let mut cycle = self.stack.clone();
            cycle.push(name.clone());
            return Err(KnotError::CycleDetected(cycle));
        }
        self.stack.push(name.clone());
        Ok(())
    }

    /// Leaves the innermost chunk.
    pub fn exit(&mut self) {
        self.stack.pop();
    }

    /// Returns the current depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Expands `name` with every reference substituted, prefixing each output
/// line with `indent`.
///
/// A reference to a chunk that does not exist expands to nothing.
pub fn expand(table: &ChunkTable, name: &ChunkName, indent: &str) -> Result<String> {
    let mut detector = CycleDetector::new();
    expand_with(table, name, indent, &mut detector)
}

/// Expands a top-level chunk (no indentation).
pub fn tangle_chunk(table: &ChunkTable, name: &ChunkName) -> Result<String> {
    expand(table, name, "")
}

/// Expands `name`, threading the cycle detector through the recursion.
pub fn expand_with(
    table: &ChunkTable,
    name: &ChunkName,
    indent: &str,
    detector: &mut CycleDetector,
) -> Result<String> {
    let Some(body) = table.body(name) else {
        tracing::debug!(chunk = %name, "undefined chunk expands to nothing");
        return Ok(String::new());
    };

    detector.enter(name)?;

    let mut substituted = String::with_capacity(body.len());
    for line in split_lines(body) {
        let Some(reference) = Reference::parse(line) else {
            substituted.push_str(line);
            continue;
        };

        let expanded = expand_with(table, &reference.name, reference.indent, detector)?;
        substituted.push_str(&expanded);
        // The reference line's own newline is dropped unless the expansion lacks one.
        if !expanded.is_empty() && !expanded.ends_with('\n') && line.ends_with('\n') {
            substituted.push('\n');
        }
    }

    detector.exit();
    Ok(indent_lines(&substituted, indent))
}
