//! Attributed text: runs of text paired with attribute sets, plus the append
//! operations used to build styled content.
//!
//! `AttributedText` is the buffer callers accumulate content into:
//!
//! ```text
//! NamedStyle → AttributedText → rendering surface
//!                  ↑
//!   push_str / push_image / push_tab_stop
//! ```
//!
//! Appends propagate the trailing run's attributes, so a chain of calls reads
//! as one fluent declaration: text pushed after an image keeps the styling
//! the image run inherited, and so on. Only the attachment key is exempt;
//! it is set fresh on every image run and never copied onto new content by
//! inheritance alone (see [`AttributedText::push_image`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

use crate::attachment::Image;
use crate::attr::{AttributeSet, AttributeValue, keys};
use crate::error::AttrTextError;
use crate::paragraph::ParagraphStyle;
use crate::special::SpecialChar;

/// A maximal range of text sharing one attribute set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Run {
    text: String,
    attrs: AttributeSet,
}

impl Run {
    /// Creates a run from text and attributes.
    pub fn new(text: impl Into<String>, attrs: AttributeSet) -> Self {
        Self {
            text: text.into(),
            attrs,
        }
    }

    /// The run's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The run's attribute set.
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Length of the run in code points.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the run holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display-cell width estimate for the run's text.
    ///
    /// Control characters (including the tab runs this library appends)
    /// contribute zero; real padding is resolved by the layout collaborator.
    pub fn cell_len(&self) -> usize {
        self.text.width()
    }
}

/// Text with per-range formatting metadata, built up by appending.
///
/// # Examples
///
/// ```
/// use attrtext::{AttributeSet, AttributeValue, AttributedText, keys, RgbaColor};
///
/// let attrs = AttributeSet::new()
///     .with(keys::COLOR, AttributeValue::Color(RgbaColor::rgb(255, 0, 0)));
/// let mut text = AttributedText::styled("Error", attrs);
/// text.push_str(": file not found");
///
/// assert_eq!(text.text(), "Error: file not found");
/// // The appended run inherited the trailing attributes.
/// assert!(text.attributes_at(8).unwrap().get(keys::COLOR).is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributedText {
    runs: Vec<Run>,
}

impl AttributedText {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer of unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, AttributeSet::new())
    }

    /// Creates a single-run buffer with the given attributes.
    ///
    /// Empty text produces an empty buffer; attributes cannot outlive the
    /// text that carries them.
    pub fn styled(text: impl Into<String>, attrs: AttributeSet) -> Self {
        let mut buffer = Self::new();
        buffer.push_run(Run::new(text, attrs));
        buffer
    }

    /// Creates a single-run buffer standing in for an image.
    ///
    /// The buffer's text is exactly one code point (the object-replacement
    /// character) regardless of the image's dimensions; the image itself
    /// rides along as the attachment attribute.
    pub fn from_image(image: Image) -> Self {
        let attrs = AttributeSet::new().with(keys::ATTACHMENT, AttributeValue::Attachment(image));
        Self::styled(SpecialChar::ObjectReplacement.to_string(), attrs)
    }

    /// Concatenates buffers with a separator between consecutive elements.
    ///
    /// N buffers produce exactly N-1 separator copies: none before the first
    /// element, none after the last. An empty input yields an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrtext::AttributedText;
    ///
    /// let parts = [
    ///     AttributedText::plain("A"),
    ///     AttributedText::plain("B"),
    ///     AttributedText::plain("C"),
    /// ];
    /// let joined = AttributedText::join(&parts, &AttributedText::plain("-"));
    /// assert_eq!(joined.text(), "A-B-C");
    /// ```
    pub fn join<'a, I>(parts: I, separator: &AttributedText) -> AttributedText
    where
        I: IntoIterator<Item = &'a AttributedText>,
    {
        let mut joined = Self::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                joined.push_attributed(separator);
            }
            joined.push_attributed(part);
        }
        joined
    }

    /// Appends text, inheriting the trailing run's attribute set.
    ///
    /// On an empty buffer the new run has no attributes.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        let attrs = self.trailing_attributes().cloned().unwrap_or_default();
        self.push_run(Run::new(text, attrs));
        self
    }

    /// Appends an image as a one-character attachment run.
    ///
    /// Trailing attributes propagate exactly as for text, except the
    /// attachment key, which is always set to the new image rather than
    /// inherited.
    pub fn push_image(&mut self, image: Image) -> &mut Self {
        let mut attrs = self.trailing_attributes().cloned().unwrap_or_default();
        attrs.insert(keys::ATTACHMENT, AttributeValue::Attachment(image));
        self.push_run(Run::new(SpecialChar::ObjectReplacement.to_string(), attrs));
        self
    }

    /// Appends another buffer verbatim, keeping its runs' own attributes.
    pub fn push_attributed(&mut self, other: &AttributedText) -> &mut Self {
        for run in &other.runs {
            self.push_run(run.clone());
        }
        self
    }

    /// Appends a tab-defining run `spacer` points past the last tab stop.
    ///
    /// The trailing paragraph style is taken as the base (a default one is
    /// created if absent), a new tab stop is added at its last stop's
    /// position plus `spacer`, and the updated style is written back across
    /// the trailing paragraph before a tab run carrying it is appended.
    ///
    /// Rejects negative and non-finite spacer widths.
    pub fn push_tab_stop(&mut self, spacer: f32) -> Result<&mut Self, AttrTextError> {
        self.push_tab_stop_inner(spacer, None)
    }

    /// Like [`push_tab_stop`](Self::push_tab_stop), with a leader repeated up
    /// to the stop (e.g., `"."` for contents-page rows).
    pub fn push_tab_stop_with_leader(
        &mut self,
        spacer: f32,
        leader: impl Into<String>,
    ) -> Result<&mut Self, AttrTextError> {
        self.push_tab_stop_inner(spacer, Some(leader.into()))
    }

    fn push_tab_stop_inner(
        &mut self,
        spacer: f32,
        leader: Option<String>,
    ) -> Result<&mut Self, AttrTextError> {
        if !spacer.is_finite() || spacer < 0.0 {
            return Err(AttrTextError::InvalidTabStopWidth(spacer));
        }

        let previous = self
            .trailing_attributes()
            .and_then(|attrs| attrs.paragraph_style())
            .cloned();
        let updated = previous
            .clone()
            .unwrap_or_default()
            .adding_tab_stop(spacer, leader);
        log::trace!(
            "tab stop at {} ({} on paragraph)",
            updated.last_tab_location(),
            updated.tab_stops.len(),
        );

        self.restyle_trailing_paragraph(previous.as_ref(), &updated);

        let mut attrs = self.trailing_attributes().cloned().unwrap_or_default();
        attrs.set_paragraph_style(updated);
        self.push_run(Run::new("\t", attrs));
        Ok(self)
    }

    /// Rewrites the paragraph style across the trailing paragraph.
    ///
    /// Walks runs back from the tail, replacing the paragraph-style attribute
    /// on every run that carried `old` (absent counts as carrying `old` only
    /// when `old` itself is absent). A run containing a newline belongs to an
    /// earlier paragraph and ends the walk, so unrelated paragraphs keep
    /// their styling.
    fn restyle_trailing_paragraph(&mut self, old: Option<&ParagraphStyle>, new: &ParagraphStyle) {
        for run in self.runs.iter_mut().rev() {
            if run.text.contains('\n') {
                break;
            }
            let carried_old = match (run.attrs.paragraph_style(), old) {
                (Some(current), Some(expected)) => current == expected,
                (None, None) => true,
                _ => false,
            };
            if !carried_old {
                break;
            }
            run.attrs.set_paragraph_style(new.clone());
        }
    }

    /// The attribute set of the last run, if any.
    pub fn trailing_attributes(&self) -> Option<&AttributeSet> {
        self.runs.last().map(|run| &run.attrs)
    }

    /// The attribute set in effect at a code-point index.
    pub fn attributes_at(&self, index: usize) -> Option<&AttributeSet> {
        let mut offset = 0;
        for run in &self.runs {
            offset += run.len();
            if index < offset {
                return Some(&run.attrs);
            }
        }
        None
    }

    /// The runs of the buffer, in order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The buffer's text with all formatting stripped.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Total length in code points.
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Display-cell width estimate for the whole buffer.
    pub fn cell_len(&self) -> usize {
        self.runs.iter().map(Run::cell_len).sum()
    }

    /// Appends a run, coalescing it into the trailing run when both share
    /// one attribute set. Empty runs are dropped.
    fn push_run(&mut self, run: Run) {
        if run.text.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.attrs == run.attrs {
                last.text.push_str(&run.text);
                return;
            }
        }
        self.runs.push(run);
    }
}

impl fmt::Display for AttributedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}
