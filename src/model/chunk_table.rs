//! The chunk table produced by a parse pass.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use super::chunk_name::ChunkName;
use super::lines::split_lines;
use super::reference::Reference;
use crate::text_location::TextLocation;

/// The accumulated text of one chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// Concatenated text of every section, in document order.
    pub body: String,
    /// Where each contributing section starts.
    pub sections: Vec<TextLocation>,
}

impl Chunk {
    /// Returns the number of lines in the body.
    pub fn line_count(&self) -> usize {
        split_lines(&self.body).count()
    }

    /// Iterates over the references on this chunk's lines.
    pub fn references(&self) -> impl Iterator<Item = Reference<'_>> {
        split_lines(&self.body).filter_map(Reference::parse)
    }
}

/// Chunk name to chunk text, in first-definition order.
///
/// Contributions to an existing name are appended, never overwritten. The
/// table is built by a reader and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkTable {
    chunks: IndexMap<ChunkName, Chunk>,
}

impl ChunkTable {
    /// Creates a new empty chunk table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a new section of `name`.
    pub fn start_section(&mut self, name: &ChunkName, location: TextLocation) {
        self.chunks
            .entry(name.clone())
            .or_default()
            .sections
            .push(location);
    }

    /// Appends text to `name`, creating the chunk if needed.
    pub fn append(&mut self, name: &ChunkName, text: &str) {
        self.chunks.entry(name.clone()).or_default().body.push_str(text);
    }

    /// Attaches a filename to every section location.
    pub fn set_filename(&mut self, path: &Path) {
        for chunk in self.chunks.values_mut() {
            for location in &mut chunk.sections {
                location.filename = Some(path.to_path_buf());
            }
        }
    }

    /// Gets a chunk by name.
    pub fn get(&self, name: &ChunkName) -> Option<&Chunk> {
        self.chunks.get(name)
    }

    /// Gets a chunk body by name.
    pub fn body(&self, name: &ChunkName) -> Option<&str> {
        self.chunks.get(name).map(|c| c.body.as_str())
    }

    /// Checks if a chunk exists.
    pub fn contains(&self, name: &ChunkName) -> bool {
        self.chunks.contains_key(name)
    }

    /// Returns all chunk names in first-definition order.
    pub fn names(&self) -> impl Iterator<Item = &ChunkName> {
        self.chunks.keys()
    }

    /// Returns all (name, chunk) pairs in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkName, &Chunk)> {
        self.chunks.iter()
    }

    /// Returns the number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if there are no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Names referenced somewhere but never defined, in order of first use.
    ///
    /// These expand to nothing; the list is only for diagnostics.
    pub fn unresolved_references(&self) -> Vec<ChunkName> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();
        for chunk in self.chunks.values() {
            for reference in chunk.references() {
                if !self.contains(&reference.name) && seen.insert(reference.name.clone()) {
                    missing.push(reference.name);
                }
            }
        }
        missing
    }

    /// Chunks that no other chunk references, excluding `*`.
    pub fn unreferenced_chunks(&self) -> Vec<&ChunkName> {
        let referenced: HashSet<ChunkName> = self
            .chunks
            .iter()
            .flat_map(|(owner, chunk)| {
                chunk
                    .references()
                    .map(|r| r.name)
                    .filter(move |name| name != owner)
            })
            .collect();

        self.names()
            .filter(|name| !name.is_default() && !referenced.contains(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_table;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append_concatenates() {
        let mut table = ChunkTable::new();
        let foo = ChunkName::new("foo");
        table.start_section(&foo, TextLocation::line_only(3));
        table.append(&foo, "a\n");
        table.start_section(&foo, TextLocation::line_only(9));
        table.append(&foo, "b\n");

        assert_eq!(table.body(&foo), Some("a\nb\n"));
        assert_eq!(table.len(), 1);

        let chunk = table.get(&foo).unwrap();
        assert_eq!(chunk.line_count(), 2);
        assert_eq!(
            chunk.sections,
            vec![TextLocation::line_only(3), TextLocation::line_only(9)]
        );
    }

    #[test]
    fn test_first_definition_order() {
        let table = make_table(&[("b", "1\n"), ("a", "2\n"), ("b", "3\n")]);
        let names: Vec<_> = table.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(table.body(&ChunkName::new("b")), Some("1\n3\n"));
    }

    #[test]
    fn test_missing_chunk() {
        let table = ChunkTable::new();
        assert!(table.is_empty());
        assert_eq!(table.body(&ChunkName::new("nope")), None);
    }

    #[test]
    fn test_unresolved_references() {
        let table = make_table(&[
            ("*", "<<a>>\n<<gone>>\n"),
            ("a", "  <<gone>>\n<<also gone>>\n"),
        ]);
        assert_eq!(
            table.unresolved_references(),
            vec![ChunkName::new("gone"), ChunkName::new("also gone")]
        );
    }

    #[test]
    fn test_unreferenced_chunks() {
        let table = make_table(&[
            ("*", "<<used>>\n"),
            ("used", "x\n"),
            ("dead", "y\n"),
            ("selfish", "<<selfish>>\n"),
        ]);
        let dead: Vec<_> = table
            .unreferenced_chunks()
            .into_iter()
            .map(|n| n.as_str())
            .collect();
        assert_eq!(dead, vec!["dead", "selfish"]);
    }

    #[test]
    fn test_set_filename() {
        let mut table = make_table(&[("*", "x\n")]);
        table.set_filename(Path::new("doc.lit"));
        let chunk = table.get(&ChunkName::default()).unwrap();
        assert_eq!(chunk.sections[0].to_string(), "doc.lit:1");
    }
}
