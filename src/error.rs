//! Crate-level error types.

use std::fmt;

/// Errors produced by the fenestra crate.
#[derive(Debug)]
pub enum FenestraError {
    /// A geometry or part parameter was out of range.
    InvalidParameter(String),
    /// An animation window was malformed.
    InvalidWindow(String),
    /// Two parts in one assembly share an identifier.
    DuplicatePartId(String),
    /// Playback speed must be strictly positive.
    InvalidSpeed(f32),
    /// Traversal duration must be strictly positive.
    InvalidTraversal(f32),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for FenestraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            Self::InvalidWindow(msg) => {
                write!(f, "invalid animation window: {msg}")
            }
            Self::DuplicatePartId(id) => {
                write!(f, "duplicate part id: {id}")
            }
            Self::InvalidSpeed(speed) => {
                write!(f, "playback speed must be positive, got {speed}")
            }
            Self::InvalidTraversal(secs) => {
                write!(
                    f,
                    "traversal duration must be positive, got {secs} s"
                )
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FenestraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FenestraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
