//! # styledtext-rs
//!
//! Declarative text styling: named styles, a style registry, and attributed
//! text built up by appending.
//!
//! The workspace splits the work in two:
//!
//! - [`attrtext`] models attributed text (runs of text + attribute sets) and
//!   the append operations that keep chained content styled.
//! - [`stylereg`] maps style *names* to styles, the indirection view bindings
//!   use to style themselves declaratively.
//!
//! This crate re-exports both and adds a file-based logger initializer.
//!
//! ## Quick Start
//!
//! ```
//! use styledtext_rs::{
//!     AttributeSet, AttributeValue, Font, Image, StyleRegistry, keys, parse_style,
//! };
//!
//! // Application setup registers its styles once.
//! let mut registry = StyleRegistry::new();
//! registry.register("alert", parse_style("bold red").unwrap());
//!
//! // A view binding resolves its declared name against the view's font...
//! let initial = AttributeSet::new()
//!     .with(keys::FONT, AttributeValue::Font(Font::new("Avenir", 16.0)));
//! let alert = registry.style_for_name(Some("alert"), &initial).unwrap();
//!
//! // ...and applies the result, appending further content fluently.
//! let mut line = alert.apply_to("Disk almost full");
//! line.push_tab_stop(32.0).unwrap();
//! line.push_image(Image::named("gauge", 16.0, 16.0));
//! assert_eq!(line.text().chars().count(), "Disk almost full".len() + 2);
//! ```

mod log_init;

pub use log_init::init_logger;

pub use attrtext::{
    AttrTextError, AttributeSet, AttributeValue, AttributedText, ColorParseError, Font,
    FontWeight, Image, NamedStyle, ParagraphStyle, RgbaColor, Run, SpecialChar, StyleHolder,
    TabStop, TextAlign, TextStyle, keys, reset_archive_warning, set_archive_warning_hook,
};
pub use stylereg::{StyleParseError, StyleRegistry, parse_style};

// Re-export the log crate so embedders can route our diagnostics.
pub use log;
