//! Error types for style-string parsing.

use thiserror::Error;

/// Errors that can occur when parsing a style specification string.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleParseError {
    /// Invalid color in style.
    #[error("invalid color in style: {0}")]
    InvalidColor(#[from] attrtext::ColorParseError),

    /// Unknown style modifier.
    #[error("unknown style modifier: {0}")]
    UnknownModifier(String),

    /// Empty style specification.
    #[error("empty style specification")]
    Empty,
}
