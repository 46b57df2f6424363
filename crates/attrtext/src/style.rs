//! Named styles: reusable, immutable bundles of attributes.

use serde::{Deserialize, Serialize};

use crate::archive::StyleHolder;
use crate::attachment::Image;
use crate::attr::{AttributeSet, AttributeValue, keys};
use crate::color::RgbaColor;
use crate::font::{Font, TextStyle};
use crate::paragraph::ParagraphStyle;
use crate::special::SpecialChar;
use crate::text::AttributedText;

/// A reusable, named bundle of formatting attributes.
///
/// A style is built once with the `with_*` methods, optionally derived from a
/// parent style, and never mutated after registration. Applying a style
/// produces attributed text; resolving it against initial attributes merges
/// the style's keys over them (style wins on conflicts).
///
/// # Examples
///
/// ```
/// use attrtext::{Font, NamedStyle, RgbaColor};
///
/// let body = NamedStyle::new().with_font(Font::new("Avenir Next", 16.0));
/// let alert = NamedStyle::new()
///     .with_color(RgbaColor::rgb(186, 60, 91))
///     .based_on(body);
///
/// let text = alert.apply_to("Something went wrong");
/// assert_eq!(text.text(), "Something went wrong");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedStyle {
    attributes: AttributeSet,
    parent: Option<Box<NamedStyle>>,
}

impl NamedStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style from an existing attribute set.
    pub fn from_attributes(attributes: AttributeSet) -> Self {
        Self {
            attributes,
            parent: None,
        }
    }

    /// Returns this style with the font attribute set.
    pub fn with_font(self, font: Font) -> Self {
        self.with_attribute(keys::FONT, AttributeValue::Font(font))
    }

    /// Returns this style with the foreground color set.
    pub fn with_color(self, color: RgbaColor) -> Self {
        self.with_attribute(keys::COLOR, AttributeValue::Color(color))
    }

    /// Returns this style with the background color set.
    pub fn with_background(self, color: RgbaColor) -> Self {
        self.with_attribute(keys::BACKGROUND, AttributeValue::Color(color))
    }

    /// Returns this style with text modifiers set.
    pub fn with_modifiers(self, modifiers: TextStyle) -> Self {
        self.with_attribute(keys::TEXT_STYLE, AttributeValue::Modifiers(modifiers))
    }

    /// Returns this style with the paragraph style set.
    pub fn with_paragraph_style(self, style: ParagraphStyle) -> Self {
        self.with_attribute(keys::PARAGRAPH_STYLE, AttributeValue::Paragraph(style))
    }

    /// Returns this style with an arbitrary attribute set.
    pub fn with_attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Returns this style derived from a parent style.
    ///
    /// The parent's attributes apply wherever this style doesn't set a key of
    /// its own; chains may nest arbitrarily deep.
    pub fn based_on(mut self, parent: NamedStyle) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// This style's own attribute layer, without the parent chain.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// The parent style, if this style derives from one.
    pub fn parent(&self) -> Option<&NamedStyle> {
        self.parent.as_deref()
    }

    /// Returns true if the style sets no attributes anywhere in its chain.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.parent.as_ref().is_none_or(|parent| parent.is_empty())
    }

    /// Flattens the derivation chain into a single attribute set.
    ///
    /// Child keys win over parent keys.
    pub fn effective_attributes(&self) -> AttributeSet {
        match &self.parent {
            Some(parent) => self.attributes.merged_over(&parent.effective_attributes()),
            None => self.attributes.clone(),
        }
    }

    /// Resolves this style against caller-supplied initial attributes.
    ///
    /// Every initial key is carried into the result; keys this style sets win
    /// on conflicts. The result is a flattened style with no parent.
    pub fn resolved_over(&self, initial: &AttributeSet) -> NamedStyle {
        NamedStyle::from_attributes(self.effective_attributes().merged_over(initial))
    }

    /// Produces attributed text carrying this style's attributes.
    ///
    /// The run also records the style itself under the `style` key, so
    /// trailing-attribute propagation keeps later appends styled.
    pub fn apply_to(&self, text: impl Into<String>) -> AttributedText {
        AttributedText::styled(text, self.applied_attributes())
    }

    /// Produces a single-run image buffer carrying this style's attributes.
    pub fn apply_to_image(&self, image: Image) -> AttributedText {
        let mut attrs = self.applied_attributes();
        attrs.insert(keys::ATTACHMENT, AttributeValue::Attachment(image));
        AttributedText::styled(SpecialChar::ObjectReplacement.to_string(), attrs)
    }

    fn applied_attributes(&self) -> AttributeSet {
        let mut attrs = self.effective_attributes();
        attrs.insert(keys::STYLE, AttributeValue::Style(StyleHolder::new(self.clone())));
        attrs
    }
}
