//! Engine flags.

use std::fmt;

/// A single engine flag.
///
/// Declaration order is the canonical output order (alphabetical by letter).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Flag {
    /// `d` - report match indices.
    MatchIndices,
    /// `g` - find every match, not just the first.
    Global,
    /// `i` - ignore case.
    CaseInsensitive,
    /// `m` - anchors match at line boundaries.
    Multiline,
    /// `s` - `.` also matches line terminators.
    DotAll,
    /// `u` - full unicode mode.
    Unicode,
    /// `y` - match only at the last index.
    Sticky,
}

impl Flag {
    pub const ALL: [Flag; 7] = [
        Flag::MatchIndices,
        Flag::Global,
        Flag::CaseInsensitive,
        Flag::Multiline,
        Flag::DotAll,
        Flag::Unicode,
        Flag::Sticky,
    ];

    pub fn letter(self) -> char {
        match self {
            Self::MatchIndices => 'd',
            Self::Global => 'g',
            Self::CaseInsensitive => 'i',
            Self::Multiline => 'm',
            Self::DotAll => 's',
            Self::Unicode => 'u',
            Self::Sticky => 'y',
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of active flags.
///
/// Setting a flag twice is a no-op. [`Display`](fmt::Display) always emits the
/// canonical sorted string, independent of the order flags were set in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    pub fn with(mut self, flag: Flag) -> Self {
        self.insert(flag);
        self
    }

    /// OR-merge another flag set into this one.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Active flags in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            write!(f, "{}", flag.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({self})")
    }
}

