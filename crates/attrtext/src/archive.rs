//! Serialization support for the style-carrying attribute.
//!
//! Attributed text serializes cleanly except for one concession: the
//! [`StyleHolder`] value under the `style` key encodes as an empty unit and
//! decodes to an empty sentinel style. This keeps whole buffers round-trippable
//! through generic serializers without errors, at the cost of the named-style
//! identity, which is in-memory only.
//!
//! The first time the sentinel-decode path runs, the library logs a warning
//! and invokes the hook installed with [`set_archive_warning_hook`], so
//! integrators notice the degradation instead of debugging it downstream.

use once_cell::sync::Lazy;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::style::NamedStyle;

/// Callback invoked (once per process) when a style attribute is decoded as
/// a sentinel.
pub type ArchiveWarningHook = Box<dyn Fn() + Send + Sync>;

static STYLE_DECODE_WARNED: AtomicBool = AtomicBool::new(false);
static WARNING_HOOK: Lazy<Mutex<Option<ArchiveWarningHook>>> = Lazy::new(|| Mutex::new(None));

/// Installs the hook called the first time a style attribute decodes to a
/// sentinel. Replaces any previously installed hook.
pub fn set_archive_warning_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    if let Ok(mut slot) = WARNING_HOOK.lock() {
        *slot = Some(Box::new(hook));
    }
}

/// Re-arms the one-time warning. Intended for test isolation, like
/// `StyleRegistry::reset`.
pub fn reset_archive_warning() {
    STYLE_DECODE_WARNED.store(false, Ordering::SeqCst);
}

fn warn_style_not_archived() {
    if STYLE_DECODE_WARNED.swap(true, Ordering::SeqCst) {
        return;
    }
    log::warn!(
        "attributed text was decoded without its named style; style identity does not survive serialization"
    );
    if let Ok(slot) = WARNING_HOOK.lock() {
        if let Some(hook) = slot.as_ref() {
            hook();
        }
    }
}

/// The style-carrying attribute value.
///
/// Wraps the [`NamedStyle`] that produced a run's attributes so later appends
/// can keep extending styled text. Serialization intentionally drops the
/// wrapped style (see the module docs).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleHolder {
    style: NamedStyle,
}

impl StyleHolder {
    /// Wraps a style for storage under the `style` attribute key.
    pub fn new(style: NamedStyle) -> Self {
        Self { style }
    }

    /// An empty holder: what the decode path produces.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// The wrapped style.
    pub fn style(&self) -> &NamedStyle {
        &self.style
    }

    /// Returns true if this holder carries no style (i.e., it came from the
    /// decode path or was built empty).
    pub fn is_sentinel(&self) -> bool {
        self.style.is_empty()
    }
}

impl Serialize for StyleHolder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // No persisted fields.
        serializer.serialize_unit_struct("StyleHolder")
    }
}

impl<'de> Deserialize<'de> for StyleHolder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HolderVisitor;

        impl<'de> Visitor<'de> for HolderVisitor {
            type Value = StyleHolder;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an empty style holder")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(StyleHolder::sentinel())
            }
        }

        let holder = deserializer.deserialize_unit_struct("StyleHolder", HolderVisitor)?;
        warn_style_not_archived();
        Ok(holder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbaColor;

    #[test]
    fn serialize_drops_style() {
        let holder = StyleHolder::new(NamedStyle::new().with_color(RgbaColor::rgb(255, 0, 0)));
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn deserialize_yields_sentinel() {
        let holder: StyleHolder = serde_json::from_str("null").unwrap();
        assert!(holder.is_sentinel());
    }
}
