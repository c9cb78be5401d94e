use expressive_core::Element;

use super::compile_elements;

fn any_of(children: Vec<Element>) -> String {
    compile_elements(&[Element::AnyOf(children)])
}

fn anything_but(children: Vec<Element>) -> String {
    compile_elements(&[Element::AnythingBut(children)])
}

fn identifier_chars() -> Vec<Element> {
    vec![
        Element::Range('a', 'z'),
        Element::Range('A', 'Z'),
        Element::Range('0', '9'),
        Element::Char('.'),
        Element::Char('#'),
    ]
}

#[test]
fn fusable_members_form_one_class() {
    insta::assert_snapshot!(any_of(identifier_chars()), @r"[a-zA-Z0-9\.#]");
}

#[test]
fn non_fusable_members_come_first() {
    let mut children = identifier_chars();
    children.push(Element::String("XXX".into()));

    insta::assert_snapshot!(any_of(children), @r"(?:XXX|[a-zA-Z0-9\.#])");
}

#[test]
fn mixed_alternation_keeps_member_order() {
    let children = vec![
        Element::String("hello".into()),
        Element::Digit,
        Element::Word,
        Element::Char('.'),
        Element::Char('#'),
    ];

    insta::assert_snapshot!(any_of(children), @r"(?:hello|\d|\w|[\.#])");
}

#[test]
fn only_non_fusable_members() {
    let children = vec![Element::Digit, Element::String("ab".into())];

    insta::assert_snapshot!(any_of(children), @r"(?:\d|ab)");
}

#[test]
fn char_sets_and_backspace_fuse() {
    let children = vec![
        Element::AnyOfChars("aeiou.-".into()),
        Element::Backspace,
    ];

    insta::assert_snapshot!(any_of(children), @r"[aeiou\.\-\b]");
}

#[test]
fn anything_but_fusable() {
    insta::assert_snapshot!(anything_but(vec![Element::Range('0', '9')]), @"[^0-9]");
}

#[test]
fn anything_but_mixed() {
    let children = vec![
        Element::String("ab".into()),
        Element::Digit,
        Element::Char('c'),
    ];

    insta::assert_snapshot!(anything_but(children), @r"(?:(?!ab|\d)[^c])");
}

#[test]
fn anything_but_without_fusable_members() {
    insta::assert_snapshot!(anything_but(vec![Element::Digit]), @r"(?:(?!\d)[\s\S])");
}

#[test]
fn empty_sets() {
    assert_eq!(any_of(vec![]), "[]");
    assert_eq!(anything_but(vec![]), "[^]");
}

#[test]
fn nested_sets_are_not_fused() {
    let children = vec![
        Element::Char('a'),
        Element::AnyOf(vec![Element::Char('b'), Element::Char('c')]),
    ];

    insta::assert_snapshot!(any_of(children), @"(?:[bc]|[a])");
}

#[test]
fn quantified_members_are_not_fused() {
    let children = vec![
        Element::Char('a'),
        Element::Quantified {
            quantifier: expressive_core::Quantifier::OneOrMore,
            inner: Box::new(Element::Char('b')),
        },
    ];

    insta::assert_snapshot!(any_of(children), @"(?:b+|[a])");
}
