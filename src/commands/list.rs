//! List command implementation.

use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::errors::Result;
use crate::model::{ChunkName, ChunkTable};
use crate::text_location::TextLocation;

use super::read_table;

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Print the listing as JSON.
    pub json: bool,
    /// Name of the input document, used in locations.
    pub source_path: Option<PathBuf>,
}

/// One row of the chunk listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkSummary<'a> {
    pub name: &'a ChunkName,
    pub lines: usize,
    pub sections: &'a [TextLocation],
    pub referenced: bool,
}

/// Summarizes every chunk in first-definition order.
pub fn summarize(table: &ChunkTable) -> Vec<ChunkSummary<'_>> {
    let dead = table.unreferenced_chunks();
    table
        .iter()
        .map(|(name, chunk)| ChunkSummary {
            name,
            lines: chunk.line_count(),
            sections: &chunk.sections,
            referenced: name.is_default() || !dead.contains(&name),
        })
        .collect()
}

/// Reads a whole document and returns the list of chunks it defines.
pub fn list<R: Read>(config: &Config, options: &ListOptions, input: R) -> Result<String> {
    let table = read_table(config, input, options.source_path.as_deref())?;

    for missing in table.unresolved_references() {
        tracing::warn!(chunk = %missing, "referenced chunk is never defined");
    }

    let summaries = summarize(&table);
    let mut output = String::new();
    if options.json {
        output.push_str(&serde_json::to_string_pretty(&summaries)?);
        output.push('\n');
    } else {
        for summary in &summaries {
            let locations = summary
                .sections
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let marker = if summary.referenced { "" } else { " (unreferenced)" };
            output.push_str(&format!(
                "{}\t{} lines\t{}{}\n",
                summary.name, summary.lines, locations, marker
            ));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dialect;
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = "<<*>>=\n<<a>>\n@\n<<a>>=\nx\ny\n@\n<<spare>>=\nz\n@\n<<a>>=\nw\n@\n";

    fn block_config() -> Config {
        Config {
            dialect: Dialect::Block,
            ..Config::default()
        }
    }

    #[test]
    fn test_list_text() {
        let out = list(&block_config(), &ListOptions::default(), DOCUMENT.as_bytes()).unwrap();

        assert_eq!(
            out,
            "*\t1 lines\tline 2\n\
             a\t3 lines\tline 5, line 12\n\
             spare\t1 lines\tline 9 (unreferenced)\n"
        );
    }

    #[test]
    fn test_list_json() {
        let options = ListOptions {
            json: true,
            source_path: Some(PathBuf::from("doc.nw")),
        };
        let out = list(&block_config(), &options, DOCUMENT.as_bytes()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["name"], "a");
        assert_eq!(rows[1]["lines"], 3);
        assert_eq!(rows[1]["sections"][1]["line"], 12);
        assert_eq!(rows[1]["sections"][1]["filename"], "doc.nw");
        assert_eq!(rows[2]["referenced"], false);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&ChunkTable::new()).is_empty());
    }
}
