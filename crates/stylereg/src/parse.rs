//! Parsing style specification strings like `"bold red on blue"`.

use attrtext::{NamedStyle, RgbaColor, TextStyle};

use crate::error::StyleParseError;

/// Parses a style from a string like `"bold red on blue"`.
///
/// Supported syntax:
/// - Modifiers: `bold`, `b`, `italic`, `i`, `underline`, `u`, `strike`, `s`,
///   `dim`, `d`, `reverse`, `r`
/// - Foreground color: `red`, `#ff5733`, `rgb(255,87,51)`
/// - Background color: `on red`, `on #ff5733`
///
/// # Examples
///
/// ```
/// use stylereg::parse_style;
///
/// let style = parse_style("bold red").unwrap();
/// assert!(!style.is_empty());
///
/// let style2 = parse_style("white on blue").unwrap();
/// assert!(style2.attributes().get(attrtext::keys::BACKGROUND).is_some());
/// ```
pub fn parse_style(input: &str) -> Result<NamedStyle, StyleParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(StyleParseError::Empty);
    }

    let mut modifiers = TextStyle::default();
    let mut foreground = None;
    let mut background = None;
    let mut words = input.split_whitespace();

    while let Some(word) = words.next() {
        let word_lower = word.to_lowercase();

        // "on" prefixes the background color
        if word_lower == "on" {
            match words.next() {
                Some(color_word) => background = Some(RgbaColor::parse(color_word)?),
                None => return Err(StyleParseError::UnknownModifier("on".to_string())),
            }
            continue;
        }

        if let Some(modifier) = parse_modifier(&word_lower) {
            modifiers = modifiers.apply(&modifier);
            continue;
        }

        if let Ok(color) = RgbaColor::parse(word) {
            foreground = Some(color);
            continue;
        }

        return Err(StyleParseError::UnknownModifier(word.to_string()));
    }

    let mut style = NamedStyle::new();
    if !modifiers.is_empty() {
        style = style.with_modifiers(modifiers);
    }
    if let Some(color) = foreground {
        style = style.with_color(color);
    }
    if let Some(color) = background {
        style = style.with_background(color);
    }
    Ok(style)
}

/// Parses a single style modifier keyword.
fn parse_modifier(word: &str) -> Option<TextStyle> {
    let mut style = TextStyle::default();

    match word {
        "bold" | "b" => style.bold = true,
        "dim" | "d" => style.dim = true,
        "italic" | "i" => style.italic = true,
        "underline" | "u" => style.underline = true,
        "strike" | "s" | "strikethrough" => style.strike = true,
        "reverse" | "r" => style.reverse = true,
        _ => return None,
    }

    Some(style)
}
