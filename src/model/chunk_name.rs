//! Chunk names.

use std::fmt;

use serde::Serialize;

/// A chunk name identifies an accumulated chunk of program text.
///
/// Names are compared exactly: case and whitespace are significant and no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChunkName(String);

impl ChunkName {
    /// The default top-level chunk.
    pub const DEFAULT: &'static str = "*";

    /// Creates a new ChunkName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the `*` chunk name.
    pub fn default_chunk() -> Self {
        Self::new(Self::DEFAULT)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if this is the default top-level chunk.
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for ChunkName {
    fn default() -> Self {
        Self::default_chunk()
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
