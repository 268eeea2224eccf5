//! Crate-level error types.

use std::fmt;

/// Errors produced by the demoframe crate.
///
/// The orientation controls never fail; only file-backed configuration and
/// gesture scripts do.
#[derive(Debug)]
pub enum DemoError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Gesture script parsing failure.
    ScriptParse(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(msg) => {
                write!(f, "gesture script parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
