//! Chunk references inside chunk bodies.

use once_cell::sync::Lazy;
use regex::Regex;

use super::chunk_name::ChunkName;

/// A whole line of the form `<indent><<name>>`, optionally followed by
/// whitespace.
pub static REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<indent>\s*)<<(?P<name>.*)>>\s*$").unwrap());

/// A reference to another chunk, found on a line of a chunk body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Whitespace preceding the `<<`, applied to every expanded line.
    pub indent: &'a str,
    /// The referenced chunk.
    pub name: ChunkName,
}

impl<'a> Reference<'a> {
    /// Recognizes a reference line. The line may carry its terminator.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = REF_PATTERN.captures(line)?;
        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let name = caps.name("name")?.as_str();
        Some(Self {
            indent,
            name: ChunkName::new(name),
        })
    }
}
