//! RGBA color type with parsing and manipulation.
//!
//! Colors appear in attribute sets as foreground (`color`) and background
//! (`background`) values. The core never interprets them; they are carried
//! through appends and merges and handed to the rendering collaborator.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`
//! - **Named**: a basic set of CSS color names like `red`, `coral`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ColorParseError;

/// An RGBA color.
///
/// # Examples
///
/// ```
/// use attrtext::RgbaColor;
///
/// let red = RgbaColor::rgb(255, 0, 0);
/// let blue = RgbaColor::parse("#0000ff").unwrap();
/// let named = RgbaColor::parse("coral").unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
        }
    }
}

impl RgbaColor {
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Creates an opaque color from RGB components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from RGB components and an alpha value.
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with a different alpha value.
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..self.clone() }
    }

    /// Parses a color from a string.
    ///
    /// Accepts hex (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), `rgb(r, g, b)`, and a
    /// basic set of named colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrtext::RgbaColor;
    ///
    /// assert_eq!(RgbaColor::parse("#ff5733").unwrap(), RgbaColor::rgb(255, 87, 51));
    /// assert_eq!(RgbaColor::parse("red").unwrap(), RgbaColor::rgb(255, 0, 0));
    /// assert!(RgbaColor::parse("not-a-color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb(body);
        }
        Self::parse_named(&input.to_lowercase())
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let digit = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                // #RGB expands each digit: #f80 -> #ff8800
                let r = digit(&hex[0..1])?;
                let g = digit(&hex[1..2])?;
                let b = digit(&hex[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
                f32::from(digit(&hex[6..8])?) / 255.0,
            )),
            _ => Err(invalid()),
        }
    }

    fn parse_rgb(body: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidRgb(format!("rgb({body})"));
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let r = parts[0].parse::<u8>().map_err(|_| invalid())?;
        let g = parts[1].parse::<u8>().map_err(|_| invalid())?;
        let b = parts[2].parse::<u8>().map_err(|_| invalid())?;
        Ok(Self::rgb(r, g, b))
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        let (r, g, b) = match name {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "gray" | "grey" => (128, 128, 128),
            "orange" => (255, 165, 0),
            "purple" => (128, 0, 128),
            "brown" => (165, 42, 42),
            "pink" => (255, 192, 203),
            "coral" => (255, 127, 80),
            "navy" => (0, 0, 128),
            "teal" => (0, 128, 128),
            "olive" => (128, 128, 0),
            "maroon" => (128, 0, 0),
            "silver" => (192, 192, 192),
            "lime" => (0, 255, 0),
            _ => return Err(ColorParseError::UnknownName(name.to_string())),
        };
        Ok(Self::rgb(r, g, b))
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f32::EPSILON {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        }
    }
}
