use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// One grapheme of the input mask.
#[allow(variant_size_differences)]
#[derive(Clone, PartialEq, Eq)]
pub enum MaskToken {
    /// One user-entered grapheme goes here.
    Placeholder,
    /// Inserted verbatim.
    Literal(Box<str>),
}

impl Display for MaskToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            MaskToken::Placeholder => "#",
            MaskToken::Literal(s) => s,
        };
        write!(f, "{}", s)
    }
}

impl Debug for MaskToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MaskToken::Placeholder => write!(f, "_"),
            MaskToken::Literal(s) => {
                write!(f, "\\")?;
                write!(f, "{}", s)
            }
        }
    }
}

impl MaskToken {
    /// Parse one grapheme of the mask.
    pub(crate) fn parse(grapheme: &str, placeholder: char) -> Self {
        let mut it = grapheme.chars();
        match (it.next(), it.next()) {
            (Some(c), None) if c == placeholder => MaskToken::Placeholder,
            _ => MaskToken::Literal(Box::from(grapheme)),
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        *self == MaskToken::Placeholder
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, MaskToken::Literal(_))
    }

    /// Text of a literal.
    pub fn literal(&self) -> Option<&str> {
        match self {
            MaskToken::Placeholder => None,
            MaskToken::Literal(s) => Some(s.as_ref()),
        }
    }
}
