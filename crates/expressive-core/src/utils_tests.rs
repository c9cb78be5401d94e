use std::borrow::Cow;

use crate::utils::{
    escape_class, escape_literal, is_hex_of_len, is_unicode_property_syntax, is_valid_group_name,
    push_escaped,
};

#[test]
fn escape_literal_borrows_when_clean() {
    assert!(matches!(escape_literal("hello"), Cow::Borrowed("hello")));
}

#[test]
fn escape_literal_specials() {
    insta::assert_snapshot!(escape_literal(r"\.^$|?*+()[]{}/-"), @r"\\\.\^\$\|\?\*\+\(\)\[\]\{\}\/-");
}

#[test]
fn escape_class_also_escapes_dash() {
    assert_eq!(escape_class("a-z"), r"a\-z");
    assert_eq!(escape_class("#"), "#");
}

#[test]
fn push_escaped_by_context() {
    let mut out = String::new();
    push_escaped(&mut out, '-', false);
    push_escaped(&mut out, '-', true);
    push_escaped(&mut out, '.', false);
    assert_eq!(out, r"-\-\.");
}

#[test]
fn group_names() {
    assert!(is_valid_group_name("module"));
    assert!(is_valid_group_name("this_is_the_name"));
    assert!(is_valid_group_name("_private2"));

    assert!(!is_valid_group_name(""));
    assert!(!is_valid_group_name("hello world"));
    assert!(!is_valid_group_name("1st"));
    assert!(!is_valid_group_name("na-me"));
}

#[test]
fn hex_lengths() {
    assert!(is_hex_of_len("2F", &[2]));
    assert!(is_hex_of_len("00e9", &[4]));
    assert!(is_hex_of_len("1F600", &[4, 5]));

    assert!(!is_hex_of_len("2G", &[2]));
    assert!(!is_hex_of_len("2F0", &[2]));
    assert!(!is_hex_of_len("", &[4, 5]));
}

#[test]
fn unicode_property_syntax() {
    assert!(is_unicode_property_syntax("L"));
    assert!(is_unicode_property_syntax("Script=Greek"));
    assert!(is_unicode_property_syntax("General_Category=Letter"));

    assert!(!is_unicode_property_syntax(""));
    assert!(!is_unicode_property_syntax("Script="));
    assert!(!is_unicode_property_syntax("=Greek"));
    assert!(!is_unicode_property_syntax("Script=Greek=Latin"));
    assert!(!is_unicode_property_syntax("L}"));
}
