use std::fmt;

/// A literal marker recognized inside a template.
///
/// `Now` is still recognized so it can be named in diagnostics, but it is
/// deprecated and never substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Builder,
    Branch,
    Hash,
    Date,
    Revision,
    Now,
}

impl Placeholder {
    /// Placeholders that are replaced, in metadata-file order.
    pub const ACTIVE: [Placeholder; 5] =
        [Self::Builder, Self::Branch, Self::Hash, Self::Date, Self::Revision];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Builder => "$BUILDER$",
            Self::Branch => "$BRANCH$",
            Self::Hash => "$HASH$",
            Self::Date => "$DATE$",
            Self::Revision => "$REVISION$",
            Self::Now => "$NOW$",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$BUILDER$" => Some(Self::Builder),
            "$BRANCH$" => Some(Self::Branch),
            "$HASH$" => Some(Self::Hash),
            "$DATE$" => Some(Self::Date),
            "$REVISION$" => Some(Self::Revision),
            "$NOW$" => Some(Self::Now),
            _ => None,
        }
    }

    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Now)
    }

    /// Position of the field in the metadata record, `None` for inert tokens.
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::Builder => Some(0),
            Self::Branch => Some(1),
            Self::Hash => Some(2),
            Self::Date => Some(3),
            Self::Revision => Some(4),
            Self::Now => None,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
