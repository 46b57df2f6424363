//! Attributed text: styled runs, appendable buffers, and named styles.
//!
//! This crate is the core of the styling pipeline: it models text paired
//! with per-range formatting attributes, and the append operations used to
//! build such text up declaratively.
//!
//! # Overview
//!
//! - [`AttributedText`]: the buffer. Ordered runs of `(text, attributes)`,
//!   extended with [`push_str`](AttributedText::push_str),
//!   [`push_image`](AttributedText::push_image), and
//!   [`push_tab_stop`](AttributedText::push_tab_stop). Appended content
//!   inherits the trailing run's attributes, so chained calls stay styled.
//! - [`AttributeSet`]: per-run key/value attributes. Keys are opaque except
//!   for the paragraph-style and attachment keys the buffer itself manages.
//! - [`NamedStyle`]: a reusable bundle of attributes, optionally derived
//!   from a parent style, applied to text or images to produce buffers.
//! - [`archive`]: serde support, including the intentional no-op
//!   serialization of the style-carrying attribute.
//!
//! # Usage
//!
//! ```
//! use attrtext::{Image, NamedStyle, RgbaColor};
//!
//! let alert = NamedStyle::new().with_color(RgbaColor::rgb(186, 60, 91));
//!
//! let mut line = alert.apply_to("3 failures");
//! line.push_tab_stop(24.0).unwrap();
//! line.push_image(Image::named("warning", 16.0, 16.0));
//!
//! assert!(line.text().starts_with("3 failures"));
//! ```

pub mod archive;
pub mod attachment;
pub mod attr;
pub mod color;
pub mod error;
pub mod font;
pub mod paragraph;
pub mod special;
pub mod style;
pub mod text;

// Re-export main types at crate root
pub use archive::{StyleHolder, reset_archive_warning, set_archive_warning_hook};
pub use attachment::Image;
pub use attr::{AttributeSet, AttributeValue, keys};
pub use color::RgbaColor;
pub use error::{AttrTextError, ColorParseError};
pub use font::{Font, FontWeight, TextStyle};
pub use paragraph::{ParagraphStyle, TabStop, TextAlign};
pub use special::SpecialChar;
pub use style::NamedStyle;
pub use text::{AttributedText, Run};
