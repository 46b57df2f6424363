//! Attribute sets: the per-run mapping from attribute keys to values.
//!
//! Keys are opaque strings as far as the core is concerned; it copies and
//! merges them without interpreting their meaning, with two exceptions it
//! must understand: [`keys::PARAGRAPH_STYLE`] (rewritten when tab stops are
//! inserted) and [`keys::ATTACHMENT`] (always set, never inherited, on image
//! appends).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::archive::StyleHolder;
use crate::attachment::Image;
use crate::color::RgbaColor;
use crate::font::{Font, TextStyle};
use crate::paragraph::ParagraphStyle;

/// Well-known attribute keys.
///
/// Any string is a valid key; these are the ones this library writes itself
/// or gives typed accessors for.
pub mod keys {
    /// The font descriptor for a run.
    pub const FONT: &str = "font";
    /// Foreground color.
    pub const COLOR: &str = "color";
    /// Background color.
    pub const BACKGROUND: &str = "background";
    /// Text modifier flags (bold, italic, ...).
    pub const TEXT_STYLE: &str = "text-style";
    /// Paragraph-level style (alignment, tab stops, ...).
    pub const PARAGRAPH_STYLE: &str = "paragraph-style";
    /// Embedded image reference.
    pub const ATTACHMENT: &str = "attachment";
    /// The named style that produced a run's attributes.
    pub const STYLE: &str = "style";
}

/// A value stored under an attribute key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A font descriptor.
    Font(Font),
    /// A color (foreground, background, or any caller-defined key).
    Color(RgbaColor),
    /// Text modifier flags.
    Modifiers(TextStyle),
    /// Paragraph-level style.
    Paragraph(ParagraphStyle),
    /// An embedded image reference.
    Attachment(Image),
    /// The style-carrying attribute; see [`crate::archive`] for its
    /// serialization behavior.
    Style(StyleHolder),
    /// An arbitrary string value.
    Text(String),
    /// An arbitrary numeric value.
    Number(f64),
    /// An arbitrary boolean value.
    Flag(bool),
}

/// An unordered mapping from attribute keys to values (keys unique).
///
/// # Examples
///
/// ```
/// use attrtext::{AttributeSet, AttributeValue, RgbaColor, keys};
///
/// let attrs = AttributeSet::new()
///     .with(keys::COLOR, AttributeValue::Color(RgbaColor::rgb(255, 0, 0)))
///     .with("kern", AttributeValue::Number(0.5));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    entries: HashMap<String, AttributeValue>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets an attribute, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.entries.insert(key.into(), value);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up an attribute by key.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Typed accessor for the paragraph-style attribute.
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(keys::PARAGRAPH_STYLE) {
            Some(AttributeValue::Paragraph(style)) => Some(style),
            _ => None,
        }
    }

    /// Sets the paragraph-style attribute.
    pub fn set_paragraph_style(&mut self, style: ParagraphStyle) {
        self.insert(keys::PARAGRAPH_STYLE, AttributeValue::Paragraph(style));
    }

    /// Typed accessor for the attachment attribute.
    pub fn attachment(&self) -> Option<&Image> {
        match self.get(keys::ATTACHMENT) {
            Some(AttributeValue::Attachment(image)) => Some(image),
            _ => None,
        }
    }

    /// Typed accessor for the font attribute.
    pub fn font(&self) -> Option<&Font> {
        match self.get(keys::FONT) {
            Some(AttributeValue::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// Merges this set over a base set.
    ///
    /// Every key of `base` is carried into the result; keys present in both
    /// take their value from `self`.
    pub fn merged_over(&self, base: &AttributeSet) -> AttributeSet {
        let mut merged = base.clone();
        for (key, value) in &self.entries {
            merged.entries.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
