//! Error types for Knot.

use thiserror::Error;

use crate::model::ChunkName;

/// Main error type for Knot operations.
#[derive(Error, Debug)]
pub enum KnotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cyclic chunk reference detected: {}", format_cycle(.0))]
    CycleDetected(Vec<ChunkName>),

    #[error("Chunk nesting exceeds {limit} levels at <<{name}>>")]
    DepthExceeded { name: ChunkName, limit: usize },
}

fn format_cycle(path: &[ChunkName]) -> String {
    path.iter()
        .map(|name| format!("<<{}>>", name))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type alias for Knot operations.
pub type Result<T> = std::result::Result<T, KnotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message() {
        let err = KnotError::CycleDetected(vec![
            ChunkName::new("a"),
            ChunkName::new("b"),
            ChunkName::new("a"),
        ]);
        assert_eq!(
            err.to_string(),
            "Cyclic chunk reference detected: <<a>> -> <<b>> -> <<a>>"
        );
    }

    #[test]
    fn test_depth_message() {
        let err = KnotError::DepthExceeded {
            name: ChunkName::new("deep"),
            limit: 8,
        };
        assert_eq!(err.to_string(), "Chunk nesting exceeds 8 levels at <<deep>>");
    }
}
