use crate::{Element, Quantifier};

#[test]
fn fusable_elements() {
    assert!(Element::Char('a').is_fusable());
    assert!(Element::Range('a', 'z').is_fusable());
    assert!(Element::AnyOfChars("xyz".into()).is_fusable());
    assert!(Element::Backspace.is_fusable());

    assert!(!Element::String("ab".into()).is_fusable());
    assert!(!Element::Digit.is_fusable());
    assert!(!Element::AnythingButRange('a', 'z').is_fusable());
    assert!(!Element::Group(vec![Element::Char('a')]).is_fusable());
}

#[test]
fn grouping_when_quantified() {
    assert!(Element::String("hello".into()).requires_grouping_when_quantified());
    assert!(Element::Subexpression(vec![Element::Digit]).requires_grouping_when_quantified());

    assert!(!Element::Char('h').requires_grouping_when_quantified());
    assert!(!Element::Capture(vec![Element::Word]).requires_grouping_when_quantified());
}

#[test]
fn requires_unicode_descends_into_children() {
    let nested = Element::Group(vec![
        Element::Digit,
        Element::Quantified {
            quantifier: Quantifier::OneOrMore,
            inner: Box::new(Element::UnicodeProperty("L".into())),
        },
    ]);
    assert!(nested.requires_unicode());
    assert!(!Element::Group(vec![Element::Digit]).requires_unicode());
}

#[test]
fn astral_ranges_require_unicode() {
    assert!(Element::Range('a', '\u{1F600}').requires_unicode());
    assert!(Element::AnythingButRange('\u{10000}', '\u{10FFFF}').requires_unicode());
    assert!(!Element::Range('a', '\u{FFFF}').requires_unicode());
}

#[test]
fn children_of_quantified_is_inner() {
    let el = Element::Quantified {
        quantifier: Quantifier::Optional,
        inner: Box::new(Element::Word),
    };
    assert_eq!(el.children(), &[Element::Word]);
    assert!(Element::Word.children().is_empty());
}

#[test]
fn kind_names() {
    assert_eq!(Element::Noop.kind_name(), "Noop");
    assert_eq!(
        Element::NamedCapture {
            name: "x".into(),
            children: vec![],
        }
        .kind_name(),
        "NamedCapture"
    );
}

#[test]
fn assertions_are_not_quantifiable() {
    assert!(Element::Digit.is_quantifiable());
    assert!(Element::Backreference(1).is_quantifiable());
    assert!(Element::Capture(vec![Element::WordBoundary]).is_quantifiable());
    assert!(Element::Subexpression(vec![Element::StartOfInput]).is_quantifiable());

    assert!(!Element::WordBoundary.is_quantifiable());
    assert!(!Element::NonWordBoundary.is_quantifiable());
    assert!(!Element::EndOfInput.is_quantifiable());
    assert!(!Element::AssertAhead(vec![Element::Digit]).is_quantifiable());
    assert!(!Element::AssertNotBehind(vec![Element::Digit]).is_quantifiable());
}
