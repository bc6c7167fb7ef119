//! Command implementations behind the `knot` binary.
//!
//! Commands read a whole `Read` stream and return their output as text. The
//! binary writes that text only once the command has succeeded, so a failed
//! run never touches the output file.

pub mod list;
pub mod tangle;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::Result;
use crate::model::ChunkTable;
use crate::readers::parse_document;

pub use list::{list, ListOptions};
pub use tangle::{tangle, TangleOptions};

/// Reads the whole input and parses it with the configured dialect.
pub fn read_table<R: Read>(
    config: &Config,
    mut input: R,
    source_path: Option<&Path>,
) -> Result<ChunkTable> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(parse_document(&text, config.dialect, source_path))
}

/// Opens a file for reading, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Sibling path the output is staged in before being renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = OsString::from(path.as_os_str());
    staged.push(".tmp");
    PathBuf::from(staged)
}

/// Writes finished output to a file, or to stdout when no path is given.
///
/// Files are replaced atomically: the text goes to `<path>.tmp`, which is
/// then renamed over `path`.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    let staged = staging_path(path);
    if let Err(e) = fs::write(&staged, text).and_then(|()| fs::rename(&staged, path)) {
        let _ = fs::remove_file(&staged);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
