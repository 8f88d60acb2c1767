//! Error types for chipflow.

use std::fmt;
use std::io;

/// Which kind of placement a lookup asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Header,
    Item,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Item => f.write_str("item"),
        }
    }
}

fn item_suffix(item: &Option<usize>) -> String {
    item.map(|i| format!(", item {i}")).unwrap_or_default()
}

/// Errors produced by chipflow.
#[derive(Debug, thiserror::Error)]
pub enum ChipflowError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{kind} index out of range: section {section}{}", item_suffix(.item))]
    OutOfRange {
        kind: LookupKind,
        section: usize,
        item: Option<usize>,
    },

    #[error("layout has not been computed")]
    NotComputed,

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChipflowError {
    /// Out-of-range error for a header lookup.
    pub fn header_out_of_range(section: usize) -> Self {
        Self::OutOfRange {
            kind: LookupKind::Header,
            section,
            item: None,
        }
    }

    /// Out-of-range error for an item lookup.
    pub fn item_out_of_range(section: usize, item: usize) -> Self {
        Self::OutOfRange {
            kind: LookupKind::Item,
            section,
            item: Some(item),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ChipflowError>;
