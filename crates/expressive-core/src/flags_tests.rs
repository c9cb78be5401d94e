use crate::{Flag, Flags};

#[test]
fn display_is_canonical_order() {
    let flags = Flags::new()
        .with(Flag::Sticky)
        .with(Flag::Global)
        .with(Flag::Unicode)
        .with(Flag::Multiline)
        .with(Flag::CaseInsensitive);

    assert_eq!(flags.to_string(), "gimuy");
}

#[test]
fn all_flags() {
    let flags = Flag::ALL.into_iter().rev().fold(Flags::new(), Flags::with);
    assert_eq!(flags.to_string(), "dgimsuy");
}

#[test]
fn insert_is_idempotent() {
    let mut flags = Flags::new();
    flags.insert(Flag::DotAll);
    flags.insert(Flag::DotAll);
    assert_eq!(flags.to_string(), "s");
    assert_eq!(flags, Flags::new().with(Flag::DotAll));
}

#[test]
fn union_merges() {
    let a = Flags::new().with(Flag::Sticky);
    let b = Flags::new().with(Flag::Global).with(Flag::Sticky);
    let merged = a.union(b);

    assert!(merged.contains(Flag::Global));
    assert!(merged.contains(Flag::Sticky));
    assert!(!merged.contains(Flag::Unicode));
    assert_eq!(merged.to_string(), "gy");
}

#[test]
fn empty() {
    assert!(Flags::new().is_empty());
    assert_eq!(Flags::new().to_string(), "");
    assert_eq!(format!("{:?}", Flags::new().with(Flag::MatchIndices)), "Flags(d)");
}

