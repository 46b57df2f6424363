//! Registry resolution behavior, as a view-binding layer exercises it.

use attrtext::{AttributeSet, AttributeValue, Font, NamedStyle, RgbaColor, keys};
use stylereg::StyleRegistry;

/// The attribute set a view binding passes in: its current font.
fn view_attributes() -> AttributeSet {
    AttributeSet::new().with(
        keys::FONT,
        AttributeValue::Font(Font::new("Avenir Next", 17.0)),
    )
}

#[test]
fn resolving_no_name_clears_styling() {
    let mut registry = StyleRegistry::new();
    registry.register("body", NamedStyle::new().with_color(RgbaColor::black()));

    assert!(registry.style_for_name(None, &view_attributes()).is_none());
}

#[test]
fn resolving_unknown_name_is_not_an_error() {
    let registry = StyleRegistry::new();
    assert!(
        registry
            .style_for_name(Some("does-not-exist"), &view_attributes())
            .is_none()
    );
}

#[test]
fn resolved_style_wins_over_initial_attributes() {
    let mut registry = StyleRegistry::new();
    registry.register(
        "heading",
        NamedStyle::new()
            .with_font(Font::new("Avenir Next", 24.0))
            .with_color(RgbaColor::rgb(1, 120, 212)),
    );

    let applied = registry
        .style_for_name(Some("heading"), &view_attributes())
        .expect("registered style");

    // The style's font replaces the view's font wholesale.
    assert_eq!(applied.attributes().font().unwrap().size, 24.0);
    assert!(applied.attributes().get(keys::COLOR).is_some());
}

#[test]
fn initial_attributes_fill_style_gaps() {
    let mut registry = StyleRegistry::new();
    registry.register("tinted", NamedStyle::new().with_color(RgbaColor::rgb(255, 0, 0)));

    let applied = registry
        .style_for_name(Some("tinted"), &view_attributes())
        .unwrap();

    // The style sets no font, so the view's own font survives.
    assert_eq!(applied.attributes().font().unwrap().family, "Avenir Next");
}

#[test]
fn derived_styles_resolve_through_their_parents() {
    let base = NamedStyle::new().with_font(Font::new("Menlo", 13.0));
    let emphasized = NamedStyle::new()
        .with_color(RgbaColor::rgb(255, 166, 43))
        .based_on(base);

    let mut registry = StyleRegistry::new();
    registry.register("emphasized", emphasized);

    let applied = registry
        .style_for_name(Some("emphasized"), &AttributeSet::new())
        .unwrap();
    assert_eq!(applied.attributes().font().unwrap().family, "Menlo");
    assert!(applied.attributes().get(keys::COLOR).is_some());
}

#[test]
fn reregistering_replaces_the_entry() {
    let mut registry = StyleRegistry::new();
    registry.register("x", NamedStyle::new().with_color(RgbaColor::rgb(255, 0, 0)));
    registry.register("x", NamedStyle::new().with_color(RgbaColor::rgb(0, 0, 255)));

    let applied = registry
        .style_for_name(Some("x"), &AttributeSet::new())
        .unwrap();
    assert_eq!(
        applied.attributes().get(keys::COLOR),
        Some(&AttributeValue::Color(RgbaColor::rgb(0, 0, 255)))
    );
}

#[test]
fn reset_isolates_tests() {
    let mut registry = StyleRegistry::new();
    registry.register("leftover", NamedStyle::new());
    registry.reset();
    assert!(registry.is_empty());
}
