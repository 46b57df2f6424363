//! Error types for attributed-text operations.

use thiserror::Error;

/// Errors that can occur when building attributed text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttrTextError {
    /// A tab stop was requested with a negative or non-finite spacer width.
    #[error("invalid tab stop width: {0}")]
    InvalidTabStopWidth(f32),
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid RGB color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),
}
