//! The name-to-style registry consulted when views declare a style by name.

use std::collections::HashMap;

use attrtext::{AttributeSet, NamedStyle};

/// A mapping from style names to [`NamedStyle`] values.
///
/// The registry is an explicitly constructed context object: application
/// setup code builds one, registers its styles, and passes it to whatever
/// resolves names (typically a view-binding layer). It is expected to be
/// populated before concurrent reads begin; callers needing writes after
/// that point add their own synchronization on top.
///
/// Lookups never fail loudly. A `None` name or an unregistered name resolves
/// to `None`, which callers treat as "leave the target unstyled"; styling
/// must stay safe to trigger from code paths that know nothing about it.
///
/// # Examples
///
/// ```
/// use attrtext::{AttributeSet, Font, NamedStyle, RgbaColor};
/// use stylereg::StyleRegistry;
///
/// let mut registry = StyleRegistry::new();
/// registry.register("alert", NamedStyle::new().with_color(RgbaColor::rgb(186, 60, 91)));
///
/// let current_font = AttributeSet::new()
///     .with(attrtext::keys::FONT, attrtext::AttributeValue::Font(Font::new("Avenir", 16.0)));
/// let resolved = registry.style_for_name(Some("alert"), &current_font);
/// assert!(resolved.is_some());
/// assert!(registry.style_for_name(Some("missing"), &current_font).is_none());
/// ```
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, NamedStyle>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a style under a name, replacing any previous entry.
    ///
    /// Last write wins.
    pub fn register(&mut self, name: impl Into<String>, style: NamedStyle) {
        let name = name.into();
        if self.styles.insert(name.clone(), style).is_some() {
            log::debug!("replacing registered style {name:?}");
        }
    }

    /// Looks up a registered style without resolving it.
    pub fn get(&self, name: &str) -> Option<&NamedStyle> {
        self.styles.get(name)
    }

    /// Resolves a declared style name against initial attributes.
    ///
    /// - `None` name: nothing to apply, returns `None`.
    /// - Unregistered name: silent miss (logged at debug level), returns
    ///   `None`, never an error.
    /// - Registered name: the named style merged over `initial`, with the
    ///   named style's keys winning on conflicts.
    pub fn style_for_name(
        &self,
        name: Option<&str>,
        initial: &AttributeSet,
    ) -> Option<NamedStyle> {
        let name = name?;
        match self.styles.get(name) {
            Some(style) => Some(style.resolved_over(initial)),
            None => {
                log::debug!("unknown style name: {name}");
                None
            }
        }
    }

    /// Removes every registered style.
    ///
    /// Intended for test isolation; production registries are add-only.
    pub fn reset(&mut self) {
        self.styles.clear();
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
