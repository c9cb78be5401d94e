use expressive_core::{Element, Flag, Flags};

use super::*;

#[test]
fn pattern_literal_form() {
    let flags = Flags::new().with(Flag::Unicode).with(Flag::Global);
    let pattern = Pattern::new(compile_elements(&[Element::Digit]), flags);

    assert_eq!(pattern.source(), r"\d");
    assert_eq!(pattern.flags(), flags);
    insta::assert_snapshot!(pattern, @r"/\d/gu");
}

#[test]
fn empty_pattern() {
    let pattern = Pattern::new(compile_elements(&[]), Flags::new());

    insta::assert_snapshot!(pattern, @"/(?:)/");
}

#[test]
fn regex_displays_like_pattern() {
    let pattern = Pattern::new(
        compile_elements(&[Element::String("a/b".into())]),
        Flags::new().with(Flag::CaseInsensitive),
    );
    let regex = pattern.to_regex().unwrap();

    assert_eq!(regex.to_string(), pattern.to_string());
    assert!(regex.is_match("xA/By"));
}
