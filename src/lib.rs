#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod auto_format;
pub mod input_mask;
pub mod reconcile;

mod grapheme;

pub use auto_format::AutoFormatState;
pub use input_mask::mask_token::MaskToken;
pub use input_mask::{InputMask, MaskConfig};
pub use reconcile::{reconcile, EditTextState, TextEdit};

/// Placeholder used when nothing else is configured.
pub const DEFAULT_PLACEHOLDER: char = '#';

#[derive(Debug, PartialEq)]
pub enum TextError {
    /// Indicates that the passed text-position was out of bounds.
    ///
    /// Contains the position attempted and the actual length
    /// of the text in graphemes, in that order.
    TextPositionOutOfBounds(upos_type, upos_type),
    /// Indicates that the passed text-range was partially or fully
    /// out of bounds.
    ///
    /// Contains the [start, end) grapheme indices of the range and the
    /// actual length of the text in graphemes, in that order.
    TextRangeOutOfBounds(upos_type, upos_type, upos_type),
    /// Indicates that a reversed range (end < start) was
    /// encountered.
    ///
    /// Contains the [start, end) grapheme indices of the range, in that order.
    TextRangeInvalid(
        upos_type, // Start.
        upos_type, // End.
    ),
    /// The lengths of an edit don't add up.
    ///
    /// Contains the length of the text before the edit, the
    /// selection length, the replacement length and the length
    /// of the text after the edit, in that order.
    EditLengthMismatch(upos_type, upos_type, upos_type, upos_type),
}

impl Display for TextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for TextError {}

/// Grapheme position type.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
