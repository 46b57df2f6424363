//! Font descriptors and text modifier flags.
//!
//! A [`Font`] names a family and size the way a view layer reports its
//! current font; [`TextStyle`] collects the boolean modifiers that layer on
//! top of it. Both are plain values carried in attribute sets.

use serde::{Deserialize, Serialize};

/// Weight of a font face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

/// A font descriptor: family name, point size, weight, and slant.
///
/// The core never resolves fonts; this is the value a view binding supplies
/// as part of the initial attributes when a named style is applied.
///
/// # Examples
///
/// ```
/// use attrtext::{Font, FontWeight};
///
/// let body = Font::new("Avenir Next", 16.0);
/// let heading = Font::new("Avenir Next", 24.0).with_weight(FontWeight::Bold);
/// assert_eq!(heading.size, 24.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name (e.g., "Avenir Next").
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Face weight.
    pub weight: FontWeight,
    /// Whether the face is italic.
    pub italic: bool,
}

impl Font {
    /// Creates a regular, upright font descriptor.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::default(),
            italic: false,
        }
    }

    /// Returns this font with the given weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with the italic slant set.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Returns this font at a different point size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Text styling modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold/increased intensity.
    pub bold: bool,
    /// Dim/decreased intensity.
    pub dim: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Strikethrough text.
    pub strike: bool,
    /// Reverse video (swap fg/bg).
    pub reverse: bool,
}

impl TextStyle {
    /// Returns true if no modifiers are set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge another TextStyle on top of this one (OR'd together).
    pub fn apply(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            strike: self.strike || other.strike,
            reverse: self.reverse || other.reverse,
        }
    }
}
