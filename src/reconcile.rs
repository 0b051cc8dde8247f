//! Reconciles a raw edit of the formatted text with the input mask.
//!
//! The host applies an edit to its text field as it would without
//! any mask, then passes the text before and after together with
//! the geometry of the edit to [reconcile]. The result is the
//! formatted text that should be shown instead, the matching
//! unformatted text and the new cursor position.
//!

use crate::grapheme::{pop, str_len, str_slice, truncate};
use crate::input_mask::InputMask;
use crate::{upos_type, TextError};
use log::debug;

/// One raw edit of the formatted text.
///
/// `selection_length` graphemes at `selection_start` of `text_before`
/// have been replaced with `replacement_length` graphemes, which gives
/// `text_after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit<'a> {
    /// Formatted text before the edit.
    pub text_before: &'a str,
    /// Text after the edit.
    pub text_after: &'a str,
    /// Start of the edit.
    pub selection_start: upos_type,
    /// Graphemes removed from `text_before`.
    pub selection_length: upos_type,
    /// Graphemes inserted into `text_after`.
    pub replacement_length: upos_type,
}

/// Result of an edit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditTextState {
    /// Text to display.
    pub formatted_text: String,
    /// User-entered graphemes only.
    pub unformatted_text: String,
    /// Cursor position in the formatted text.
    pub cursor: upos_type,
}

impl<'a> TextEdit<'a> {
    pub fn new(
        text_before: &'a str,
        text_after: &'a str,
        selection_start: upos_type,
        selection_length: upos_type,
        replacement_length: upos_type,
    ) -> Self {
        Self {
            text_before,
            text_after,
            selection_start,
            selection_length,
            replacement_length,
        }
    }

    /// Checks that the edit geometry fits both texts.
    pub fn validate(&self) -> Result<(), TextError> {
        let len_before = str_len(self.text_before);
        let len_after = str_len(self.text_after);

        if self.selection_start > len_before {
            return Err(TextError::TextPositionOutOfBounds(
                self.selection_start,
                len_before,
            ));
        }
        if self.selection_start > len_after {
            return Err(TextError::TextPositionOutOfBounds(
                self.selection_start,
                len_after,
            ));
        }
        let sel_end = self.selection_start.saturating_add(self.selection_length);
        if sel_end > len_before {
            return Err(TextError::TextRangeOutOfBounds(
                self.selection_start,
                sel_end,
                len_before,
            ));
        }
        let rep_end = self.selection_start.saturating_add(self.replacement_length);
        if rep_end > len_after {
            return Err(TextError::TextRangeOutOfBounds(
                self.selection_start,
                rep_end,
                len_after,
            ));
        }
        if len_before - self.selection_length + self.replacement_length != len_after {
            return Err(TextError::EditLengthMismatch(
                len_before,
                self.selection_length,
                self.replacement_length,
                len_after,
            ));
        }
        Ok(())
    }

    /// The edit changes the length of the text.
    #[inline]
    fn changes_len(&self) -> bool {
        self.selection_length != self.replacement_length
    }

    /// Backspace or delete of a single grapheme.
    #[inline]
    fn is_single_delete(&self) -> bool {
        self.selection_length == 1 && self.replacement_length == 0
    }
}

/// Calculates the new formatted text, unformatted text and cursor
/// for an edit.
///
/// * Without a mask, or with an empty one, `text_after` is used as is.
/// * An edit that makes the text longer than the mask is rejected,
///   unless it starts at the very beginning or `text_after` already
///   has the shape of the mask. `text_before` stays, the cursor
///   stays at the start of the edit.
/// * Otherwise the graphemes left and right of the edit are unformatted,
///   the inserted graphemes are put between them and the result is
///   formatted again. The cursor goes behind the inserted graphemes.
///
/// Deleting a single literal deletes the user-entered grapheme before
/// it too. Otherwise backspace would be stuck at the literal.
///
/// Fails if the edit geometry doesn't match the texts.
pub fn reconcile(
    mask: Option<&InputMask>,
    edit: &TextEdit<'_>,
) -> Result<EditTextState, TextError> {
    edit.validate()?;

    let Some(mask) = mask.filter(|v| v.is_active()) else {
        return Ok(EditTextState {
            formatted_text: edit.text_after.to_string(),
            unformatted_text: edit.text_after.to_string(),
            cursor: edit.selection_start + edit.replacement_length,
        });
    };

    let len_before = str_len(edit.text_before);
    let len_after = str_len(edit.text_after);

    if len_after > mask.len()
        && edit.changes_len()
        && edit.selection_start > 0
        && !mask.matches(edit.text_after)
    {
        debug!(
            "reject edit at {}: {} exceeds mask {:?}",
            edit.selection_start,
            len_after,
            mask.mask()
        );
        return Ok(EditTextState {
            formatted_text: edit.text_before.to_string(),
            unformatted_text: mask.unformat_text(edit.text_before, 0, len_before)?,
            cursor: edit.selection_start,
        });
    }

    let inserted = str_slice(
        edit.text_after,
        edit.selection_start..edit.selection_start + edit.replacement_length,
    )?;
    let mut left = mask.unformat_text(edit.text_before, 0, edit.selection_start)?;
    let right = mask.unformat_text(
        edit.text_before,
        edit.selection_start + edit.selection_length,
        len_before,
    )?;

    if !left.is_empty()
        && str_len(&left) <= mask.unformatted_len()
        && !mask.is_placeholder(edit.selection_start)
        && edit.is_single_delete()
    {
        pop(&mut left);
    }

    left.push_str(inserted);
    let cursor = str_len(&mask.format_text(&left));

    let mut unformatted = left;
    unformatted.push_str(&right);
    truncate(&mut unformatted, mask.unformatted_len());

    Ok(EditTextState {
        formatted_text: mask.format_text(&unformatted),
        unformatted_text: unformatted,
        cursor,
    })
}
