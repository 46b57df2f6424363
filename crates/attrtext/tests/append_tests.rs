//! Append behavior: attribute propagation, joins, images, and tab stops.

use attrtext::{
    AttributeSet, AttributeValue, AttributedText, Image, NamedStyle, ParagraphStyle, SpecialChar,
    TextAlign, keys,
};

fn test_image() -> Image {
    Image::named("robot", 36.0, 36.0)
}

#[test]
fn image_constructor_is_one_replacement_char() {
    let image_text = AttributedText::from_image(test_image());
    assert_eq!(image_text.text(), SpecialChar::ObjectReplacement.to_string());
    assert_eq!(image_text.len(), 1);
}

#[test]
fn basic_join() {
    let parts = [
        AttributedText::plain("A"),
        AttributedText::plain("B"),
        AttributedText::plain("C"),
    ];
    let joined = AttributedText::join(&parts, &AttributedText::plain("-"));
    assert_eq!(joined.text(), "A-B-C");
}

#[test]
fn join_of_nothing_is_empty() {
    let parts: [AttributedText; 0] = [];
    let joined = AttributedText::join(&parts, &AttributedText::plain("-"));
    assert!(joined.is_empty());
    assert_eq!(joined.text(), "");
}

#[test]
fn join_of_one_has_no_separator() {
    let parts = [AttributedText::plain("solo")];
    let joined = AttributedText::join(&parts, &AttributedText::plain("-"));
    assert_eq!(joined.text(), "solo");
}

#[test]
fn join_keeps_each_parts_attributes() {
    let red = AttributeSet::new().with(keys::COLOR, AttributeValue::Text("red".into()));
    let parts = [
        AttributedText::styled("A", red.clone()),
        AttributedText::plain("B"),
    ];
    let joined = AttributedText::join(&parts, &AttributedText::plain("-"));
    assert_eq!(joined.attributes_at(0), Some(&red));
    assert!(joined.attributes_at(1).unwrap().is_empty());
}

#[test]
fn attributes_pass_along_appends() {
    let style = NamedStyle::new().with_attribute("test", AttributeValue::Text("test".into()));
    let mut chain = style.apply_to_image(test_image());
    chain.push_str("Test");
    chain.push_image(test_image());
    chain.push_str("Test");

    let attrs = chain.attributes_at(chain.len() - 1).unwrap();
    assert_eq!(attrs.get("test"), Some(&AttributeValue::Text("test".into())));
}

#[test]
fn tab_stops_accumulate_spacer_widths() {
    let mut line = AttributedText::new();
    line.push_str("astringwithsomewidth");
    line.push_tab_stop(10.0).unwrap();
    line.push_image(test_image());
    line.push_tab_stop(15.0).unwrap();
    line.push_str("astringwithsomewidth");

    let style = line
        .trailing_attributes()
        .unwrap()
        .paragraph_style()
        .unwrap();
    let locations: Vec<f32> = style.tab_stops.iter().map(|stop| stop.location).collect();
    assert_eq!(locations, vec![10.0, 25.0]);
    assert!(locations.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn tab_stops_on_empty_buffer_accumulate() {
    let mut line = AttributedText::new();
    line.push_tab_stop(10.0).unwrap();
    line.push_tab_stop(20.0).unwrap();

    let style = line
        .trailing_attributes()
        .unwrap()
        .paragraph_style()
        .unwrap();
    let locations: Vec<f32> = style.tab_stops.iter().map(|stop| stop.location).collect();
    assert_eq!(locations, vec![10.0, 30.0]);
}

#[test]
fn initial_paragraph_style_survives_promotion() {
    let centered = ParagraphStyle::new().with_alignment(TextAlign::Center);
    let initial = AttributeSet::new().with(
        keys::PARAGRAPH_STYLE,
        AttributeValue::Paragraph(centered),
    );
    let mut text = AttributedText::styled("Test", initial);
    text.push_tab_stop(10.0).unwrap();
    text.push_str("paragraph style promotion");

    let promoted = text.attributes_at(0).unwrap().paragraph_style().unwrap();
    assert_eq!(promoted.alignment, TextAlign::Center);
    assert_eq!(promoted.tab_stops.len(), 1);
}

#[test]
fn whole_trailing_paragraph_shares_promoted_style() {
    let mut line = AttributedText::new();
    line.push_str("left");
    line.push_image(test_image());
    line.push_tab_stop(10.0).unwrap();

    // Every run of the paragraph reports the same stop list.
    for run in line.runs() {
        let style = run.attrs().paragraph_style().expect("promoted style");
        assert_eq!(style.tab_stops.len(), 1);
        assert_eq!(style.tab_stops[0].location, 10.0);
    }
}
