//! Round-tripping attributed text through a generic serializer.
//!
//! The style-carrying attribute intentionally does not survive: it encodes
//! as an empty unit, decodes as a sentinel, and warns once per process.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use attrtext::{
    AttributeSet, AttributeValue, AttributedText, Image, NamedStyle, RgbaColor, keys,
};

#[test]
fn style_attribute_degrades_to_sentinel_and_warns_once() {
    attrtext::reset_archive_warning();

    let style = NamedStyle::new().with_color(RgbaColor::rgb(255, 0, 0));
    let mut text = style.apply_to("astringwithsomewidth");
    text.push_tab_stop(10.0).unwrap();
    text.push_image(Image::named("robot", 36.0, 36.0));

    let data = serde_json::to_string(&text).expect("attributed text always serializes");

    let warnings = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&warnings);
    attrtext::set_archive_warning_hook(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let decoded: AttributedText = serde_json::from_str(&data).expect("decoding never fails");
    assert_eq!(decoded.text(), text.text());

    let attrs = decoded.attributes_at(0).unwrap();
    // Ordinary attributes survive the trip.
    assert_eq!(
        attrs.get(keys::COLOR),
        Some(&AttributeValue::Color(RgbaColor::rgb(255, 0, 0)))
    );
    // The style attribute is still present, but empty.
    match attrs.get(keys::STYLE) {
        Some(AttributeValue::Style(holder)) => assert!(holder.is_sentinel()),
        other => panic!("expected sentinel style holder, got {other:?}"),
    }

    // Decoding a second time does not warn again.
    let decoded_again: AttributedText = serde_json::from_str(&data).unwrap();
    assert_eq!(decoded_again.text(), text.text());
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

#[test]
fn round_trip_without_style_attribute_is_lossless() {
    let attrs = AttributeSet::new().with(
        keys::COLOR,
        AttributeValue::Color(RgbaColor::rgb(0, 128, 255)),
    );
    let mut text = AttributedText::styled("inventory", attrs);
    text.push_tab_stop_with_leader(48.0, ".").unwrap();
    text.push_str("42");
    text.push_image(Image::sized(12.0, 12.0));

    let data = serde_json::to_string(&text).unwrap();
    let decoded: AttributedText = serde_json::from_str(&data).unwrap();
    assert_eq!(decoded, text);
}
