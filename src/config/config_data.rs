//! Configuration data structures.

use serde::{Deserialize, Serialize};

use super::dialect::Dialect;
use crate::model::{ChunkName, MAX_DEPTH};

/// Main configuration structure for Knot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directive syntax of input documents.
    #[serde(default)]
    pub dialect: Dialect,

    /// Chunk expanded when none is named on the command line.
    #[serde(default = "default_chunk")]
    pub default_chunk: String,

    /// Most chunks allowed on one expansion path.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_chunk() -> String {
    ChunkName::DEFAULT.to_string()
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            default_chunk: default_chunk(),
            max_depth: default_max_depth(),
        }
    }
}

impl Config {
    /// Returns the start chunk, preferring an explicit name.
    pub fn start_chunk(&self, explicit: Option<&str>) -> ChunkName {
        ChunkName::new(explicit.unwrap_or(self.default_chunk.as_str()))
    }
}
