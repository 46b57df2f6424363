//! # stylereg - Named Style Registry
//!
//! A registry mapping style names to [`attrtext::NamedStyle`] values, plus a
//! small parser for style specification strings. This is the piece view
//! bindings talk to: a view declares a style *name*, the binding supplies the
//! view's current attributes (typically its font), and the registry resolves
//! the two into one applied style.
//!
//! ## Quick Start
//!
//! ```rust
//! use attrtext::{AttributeSet, AttributeValue, Font, keys};
//! use stylereg::{StyleRegistry, parse_style};
//!
//! let mut registry = StyleRegistry::new();
//! registry.register("alert", parse_style("bold red").unwrap());
//!
//! // A view binding resolves its declared name against the current font.
//! let initial = AttributeSet::new()
//!     .with(keys::FONT, AttributeValue::Font(Font::new("Avenir", 16.0)));
//! let applied = registry.style_for_name(Some("alert"), &initial).unwrap();
//!
//! // The named style's keys win; the view's font is carried through.
//! assert!(applied.attributes().font().is_some());
//! ```
//!
//! ## Miss Policy
//!
//! Resolution is deliberately non-fatal: a `None` or unregistered name
//! yields `None` (logged at debug level), so tooling that touches styled
//! views without knowing about styling never faults.
//!
//! ## Modules
//!
//! - [`registry`]: the [`StyleRegistry`] context object
//! - [`parse`]: style-string parsing
//! - [`error`]: parse error types

pub mod error;
pub mod parse;
pub mod registry;

pub use error::StyleParseError;
pub use parse::parse_style;
pub use registry::StyleRegistry;
