//! Core model types for Knot.

mod chunk_name;
mod chunk_table;
pub mod lines;
mod reference;
mod tangle;

pub use chunk_name::ChunkName;
pub use chunk_table::{Chunk, ChunkTable};
pub use reference::{Reference, REF_PATTERN};
pub use tangle::{expand, expand_with, tangle_chunk, CycleDetector, MAX_DEPTH};
