//! Knot - Minimal Literate Programming Tangle Engine
//!
//! Knot reads a literate document, collects its named chunks of program text,
//! and reconstructs a program by recursively substituting `<<chunk>>`
//! references, carrying each reference's indentation into the expansion.
//!
//! # Dialects
//!
//! - **Indented**: lines indented four spaces are code, `(in NAME)` switches
//!   the chunk that following code lines go to
//! - **Block**: `<<NAME>>=` opens a verbatim block that a lone `@` closes
//!
//! # Example
//!
//! ```
//! use knot::config::Dialect;
//!
//! let doc = "Prose.\n\n    def f():\n        <<body>>\n\n    (in body)\n    return 1\n";
//! let program = knot::tangle(doc, Dialect::Indented, "*").unwrap();
//! assert_eq!(program, "def f():\n    return 1\n");
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod model;
pub mod readers;
pub mod text_location;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::{Config, Dialect};
pub use errors::{KnotError, Result};
pub use model::{expand, tangle_chunk, ChunkName, ChunkTable};
pub use readers::parse_document;

/// Parses `input` and expands chunk `name` in one step.
pub fn tangle(input: &str, dialect: Dialect, name: &str) -> Result<String> {
    let table = parse_document(input, dialect, None);
    tangle_chunk(&table, &ChunkName::new(name))
}
