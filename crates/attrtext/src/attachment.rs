//! Image references carried by the attachment attribute.

use serde::{Deserialize, Serialize};

/// A reference to an image embedded in attributed text.
///
/// The core never loads or draws images; it carries the reference and its
/// layout dimensions through to the rendering collaborator. The run holding
/// an attachment always has the object-replacement character as its text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Identifier the rendering side resolves (asset name, path, URL).
    pub source: Option<String>,
    /// Layout width in points.
    pub width: f32,
    /// Layout height in points.
    pub height: f32,
}

impl Image {
    /// Creates an anonymous image reference with the given dimensions.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            source: None,
            width,
            height,
        }
    }

    /// Creates a named image reference with the given dimensions.
    pub fn named(source: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: Some(source.into()),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_has_no_source() {
        let image = Image::sized(36.0, 36.0);
        assert!(image.source.is_none());
        assert_eq!(image.width, 36.0);
    }

    #[test]
    fn named_keeps_source() {
        let image = Image::named("robot", 36.0, 36.0);
        assert_eq!(image.source.as_deref(), Some("robot"));
    }
}
