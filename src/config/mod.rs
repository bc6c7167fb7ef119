//! Configuration loading and management.

mod config_data;
mod dialect;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use dialect::Dialect;

use crate::errors::{KnotError, Result};

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["knot.toml", ".knot.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    if config.default_chunk.is_empty() {
        return Err(KnotError::Config(format!(
            "{}: default_chunk must not be empty",
            path.display()
        )));
    }
    if config.max_depth == 0 {
        return Err(KnotError::Config(format!(
            "{}: max_depth must be at least 1",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), dialect = %config.dialect, "loaded configuration");
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("knot.toml");
        fs::write(&config_path, "dialect = \"block\"").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_hidden_config_in_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".knot.toml");
        fs::write(&config_path, "dialect = \"block\"").unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("knot.toml");
        fs::write(
            &config_path,
            "dialect = \"block\"\ndefault_chunk = \"main.py\"\n",
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.dialect, Dialect::Block);
        assert_eq!(config.default_chunk, "main.py");
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_config_rejects_empty_chunk() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("knot.toml");
        fs::write(&config_path, "default_chunk = \"\"").unwrap();

        let result = read_config_file(&config_path);
        assert!(matches!(result, Err(KnotError::Config(_))));
    }

    #[test]
    fn test_read_config_rejects_zero_depth() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("knot.toml");
        fs::write(&config_path, "max_depth = 0").unwrap();

        let result = read_config_file(&config_path);
        assert!(matches!(result, Err(KnotError::Config(_))));
    }

    #[test]
    fn test_read_config_bad_dialect() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("knot.toml");
        fs::write(&config_path, "dialect = \"markdown\"").unwrap();

        let result = read_config_file(&config_path);
        assert!(matches!(result, Err(KnotError::TomlParse(_))));
    }
}
