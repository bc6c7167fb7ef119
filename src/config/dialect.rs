//! Input dialect selection.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Directive syntax used by an input document.
///
/// The two grammars collide on some inputs, so a document is read with
/// exactly one of them; there is no detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Program lines are indented four spaces; `(in NAME)` switches chunks.
    #[default]
    Indented,

    /// `<<NAME>>=` opens a verbatim block that `@` closes.
    Block,
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "indented" | "indent" => Ok(Dialect::Indented),
            "block" | "noweb" => Ok(Dialect::Block),
            _ => Err(serde::de::Error::custom(format!(
                "unknown dialect: '{}' (expected 'indented' or 'block')",
                s
            ))),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Indented => write!(f, "indented"),
            Dialect::Block => write!(f, "block"),
        }
    }
}
