//! Repetition operators.

use std::fmt;

/// A repetition applied to the next emitted element.
///
/// Bounds are validated by the builder before a quantifier is created:
/// counts are positive and `Between` has `min < max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quantifier {
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `*?`
    ZeroOrMoreLazy,
    /// `+`
    OneOrMore,
    /// `+?`
    OneOrMoreLazy,
    /// `{n}`
    Exactly(u32),
    /// `{n,}`
    AtLeast(u32),
    /// `{n,}?`
    AtLeastLazy(u32),
    /// `{min,max}`
    Between(u32, u32),
    /// `{min,max}?`
    BetweenLazy(u32, u32),
}

impl Quantifier {
    /// Name of the builder method that sets this quantifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::ZeroOrMore => "zero_or_more",
            Self::ZeroOrMoreLazy => "zero_or_more_lazy",
            Self::OneOrMore => "one_or_more",
            Self::OneOrMoreLazy => "one_or_more_lazy",
            Self::Exactly(_) => "exactly",
            Self::AtLeast(_) => "at_least",
            Self::AtLeastLazy(_) => "at_least_lazy",
            Self::Between(..) => "between",
            Self::BetweenLazy(..) => "between_lazy",
        }
    }
}

/// Renders the pattern suffix, e.g. `+?` or `{2,5}`.
impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Optional => f.write_str("?"),
            Self::ZeroOrMore => f.write_str("*"),
            Self::ZeroOrMoreLazy => f.write_str("*?"),
            Self::OneOrMore => f.write_str("+"),
            Self::OneOrMoreLazy => f.write_str("+?"),
            Self::Exactly(n) => write!(f, "{{{n}}}"),
            Self::AtLeast(n) => write!(f, "{{{n},}}"),
            Self::AtLeastLazy(n) => write!(f, "{{{n},}}?"),
            Self::Between(min, max) => write!(f, "{{{min},{max}}}"),
            Self::BetweenLazy(min, max) => write!(f, "{{{min},{max}}}?"),
        }
    }
}
