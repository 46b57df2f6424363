//! Reserved code points used as placeholders in attributed text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved unicode code points with a defined meaning in attributed text.
///
/// `ObjectReplacement` stands in for non-text content (an image run's entire
/// text is this one character); `ZeroWidthSpace` gives an otherwise empty
/// text surface a character to resolve default attributes against.
///
/// # Examples
///
/// ```
/// use attrtext::SpecialChar;
///
/// assert_eq!(char::from(SpecialChar::ObjectReplacement), '\u{FFFC}');
/// assert_eq!(SpecialChar::ZeroWidthSpace.to_string(), "\u{200B}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialChar {
    /// U+FFFC OBJECT REPLACEMENT CHARACTER: placeholder for embedded content.
    ObjectReplacement,
    /// U+200B ZERO WIDTH SPACE: invisible character carrying attributes.
    ZeroWidthSpace,
}

impl SpecialChar {
    /// Returns the code point this placeholder stands for.
    pub const fn as_char(self) -> char {
        match self {
            Self::ObjectReplacement => '\u{FFFC}',
            Self::ZeroWidthSpace => '\u{200B}',
        }
    }
}

impl From<SpecialChar> for char {
    fn from(special: SpecialChar) -> Self {
        special.as_char()
    }
}

impl fmt::Display for SpecialChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_replacement_code_point() {
        assert_eq!(SpecialChar::ObjectReplacement.as_char(), '\u{FFFC}');
    }

    #[test]
    fn display_writes_single_char() {
        assert_eq!(SpecialChar::ObjectReplacement.to_string().chars().count(), 1);
        assert_eq!(SpecialChar::ZeroWidthSpace.to_string().chars().count(), 1);
    }
}
