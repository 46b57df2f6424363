//! Paragraph-level styling: alignment, spacing, and tab stops.
//!
//! `ParagraphStyle` is a plain value. There is no read-only/mutable split:
//! adding a tab stop produces a new value via [`ParagraphStyle::adding_tab_stop`],
//! and the buffer assigns that value back into the runs of the paragraph being
//! edited. No two runs ever alias a shared style object.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A single tab stop: an absolute column position plus an optional leader.
///
/// The leader is the text a layout engine repeats to fill the gap up to the
/// stop (e.g., `"."` for a table of contents).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    /// Absolute position of the stop, in points from the leading margin.
    pub location: f32,
    /// Optional fill text repeated up to the stop.
    pub leader: Option<String>,
}

impl TabStop {
    /// Creates a tab stop at the given position with no leader.
    pub fn at(location: f32) -> Self {
        Self {
            location,
            leader: None,
        }
    }

    /// Creates a tab stop at the given position with a leader.
    pub fn with_leader(location: f32, leader: impl Into<String>) -> Self {
        Self {
            location,
            leader: Some(leader.into()),
        }
    }
}

/// Paragraph-level attributes applied to a range of attributed text.
///
/// # Examples
///
/// ```
/// use attrtext::{ParagraphStyle, TextAlign};
///
/// let style = ParagraphStyle::new().with_alignment(TextAlign::Center);
/// let with_stop = style.adding_tab_stop(100.0, None);
/// assert_eq!(with_stop.alignment, TextAlign::Center);
/// assert_eq!(with_stop.tab_stops[0].location, 100.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Horizontal alignment.
    pub alignment: TextAlign,
    /// Additional space between lines, in points.
    pub line_spacing: f32,
    /// Tab stops in ascending position order.
    pub tab_stops: Vec<TabStop>,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            alignment: TextAlign::default(),
            line_spacing: 0.0,
            tab_stops: Vec::new(),
        }
    }
}

impl ParagraphStyle {
    /// Creates a default paragraph style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this style with the given alignment.
    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns this style with the given line spacing.
    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Position of the last tab stop, or 0 when none exist.
    pub fn last_tab_location(&self) -> f32 {
        self.tab_stops.last().map_or(0.0, |stop| stop.location)
    }

    /// Returns a copy of this style with one more tab stop appended.
    ///
    /// The new stop lands `spacer` points past the last existing stop, so
    /// stop positions accumulate and stay in ascending order.
    pub fn adding_tab_stop(&self, spacer: f32, leader: Option<String>) -> Self {
        let mut updated = self.clone();
        updated.tab_stops.push(TabStop {
            location: self.last_tab_location() + spacer,
            leader,
        });
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_tab_stops() {
        let style = ParagraphStyle::new();
        assert!(style.tab_stops.is_empty());
        assert_eq!(style.last_tab_location(), 0.0);
    }

    #[test]
    fn tab_stops_accumulate() {
        let style = ParagraphStyle::new()
            .adding_tab_stop(10.0, None)
            .adding_tab_stop(25.0, None);
        let locations: Vec<f32> = style.tab_stops.iter().map(|stop| stop.location).collect();
        assert_eq!(locations, vec![10.0, 35.0]);
    }

    #[test]
    fn adding_tab_stop_preserves_fields() {
        let style = ParagraphStyle::new()
            .with_alignment(TextAlign::Right)
            .with_line_spacing(2.0);
        let updated = style.adding_tab_stop(50.0, Some(".".to_string()));
        assert_eq!(updated.alignment, TextAlign::Right);
        assert_eq!(updated.line_spacing, 2.0);
        assert_eq!(updated.tab_stops[0].leader.as_deref(), Some("."));
        // The original value is untouched.
        assert!(style.tab_stops.is_empty());
    }
}
