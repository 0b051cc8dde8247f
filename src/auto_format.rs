//! Text field state with an auto-formatting input mask.
//!
//! This is the part of a text input widget that keeps the text,
//! the unformatted text and the cursor in sync with the mask.
//! Rendering and event-handling stay with the widget.
//!
//! ```rust
//! use rat_autoformat::AutoFormatState;
//!
//! let mut state = AutoFormatState::new().with_mask("##/##/####");
//! state.insert_str("24");
//! assert_eq!(state.text(), "24/");
//! assert_eq!(state.cursor(), 3);
//! state.insert_str("122024");
//! assert_eq!(state.text(), "24/12/2024");
//! assert_eq!(state.unformatted_text(), "24122024");
//! assert!(state.is_complete());
//! ```
//!
//! Each edit is applied to the formatted text as is, and then
//! handed to [reconcile](crate::reconcile()) which decides about the
//! final text and cursor position.
//!

use crate::grapheme::{byte_range, grapheme_cover, str_len, str_slice, truncate};
use crate::input_mask::{InputMask, MaskConfig};
use crate::reconcile::{reconcile, EditTextState, TextEdit};
use crate::{upos_type, TextError};
use log::debug;
use std::cmp::{max, min};
use std::mem;
use std::ops::Range;

/// State of a text field with input mask.
#[derive(Debug, Default, Clone)]
pub struct AutoFormatState {
    mask: InputMask,
    // formatted text
    text: String,
    // user-entered graphemes
    unformatted: String,
    cursor: upos_type,
    anchor: upos_type,
}

impl AutoFormatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New state with the configured mask.
    pub fn from_config(cfg: &MaskConfig) -> Self {
        let mut state = Self {
            mask: InputMask::from_config(cfg),
            ..Default::default()
        };
        state.set_text("");
        state
    }

    /// With input mask.
    pub fn with_mask<S: AsRef<str>>(mut self, pattern: S) -> Self {
        self.set_mask(pattern);
        self
    }

    /// Set a new input mask.
    ///
    /// The current unformatted text is kept as far as it fits
    /// the new mask and is formatted again.
    pub fn set_mask<S: AsRef<str>>(&mut self, pattern: S) {
        let mut unformatted = mem::take(&mut self.unformatted);
        self.mask.set_mask(pattern);
        if self.mask.is_active() {
            truncate(&mut unformatted, self.mask.unformatted_len());
        }
        debug!(
            "set mask {:?} with {:?}",
            self.mask.mask(),
            unformatted.as_str()
        );
        self.set_text(unformatted);
    }

    /// Remove the input mask. The formatted text stays as it is.
    pub fn clear_mask(&mut self) {
        self.mask.clear_mask();
        self.unformatted = self.text.clone();
    }

    /// Current pattern.
    #[inline]
    pub fn mask(&self) -> Option<&str> {
        self.mask.mask()
    }

    #[inline]
    pub fn input_mask(&self) -> &InputMask {
        &self.mask
    }
}

impl AutoFormatState {
    /// Formatted text.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Text without any literals of the mask.
    #[inline]
    pub fn unformatted_text(&self) -> &str {
        self.unformatted.as_str()
    }

    /// Length of the formatted text in graphemes.
    #[inline]
    pub fn len(&self) -> upos_type {
        str_len(&self.text)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The formatted text fills the whole mask.
    /// Always true without a mask.
    pub fn is_complete(&self) -> bool {
        if self.mask.is_active() {
            self.mask.matches(&self.text)
        } else {
            true
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() && self.unformatted.is_empty() {
            false
        } else {
            self.text.clear();
            self.unformatted.clear();
            self.cursor = 0;
            self.anchor = 0;
            true
        }
    }

    /// Set the unformatted text. The mask is applied and the
    /// cursor goes to the end of the text.
    ///
    /// Graphemes beyond the capacity of the mask are dropped.
    pub fn set_text<S: Into<String>>(&mut self, s: S) {
        let s = s.into();
        let edit = TextEdit::new(&self.text, &s, 0, str_len(&self.text), str_len(&s));
        let state = reconcile(Some(&self.mask), &edit).expect("valid_edit");
        self.apply(state);
    }
}

impl AutoFormatState {
    /// Cursor position.
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.cursor
    }

    /// Selection anchor.
    #[inline]
    pub fn anchor(&self) -> upos_type {
        self.anchor
    }

    /// Set the cursor position. The position is clamped to the text.
    pub fn set_cursor(&mut self, cursor: upos_type, extend_selection: bool) -> bool {
        let old = (self.cursor, self.anchor);
        self.cursor = min(cursor, self.len());
        if !extend_selection {
            self.anchor = self.cursor;
        }
        old != (self.cursor, self.anchor)
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    /// Selection as range.
    #[inline]
    pub fn selection(&self) -> Range<upos_type> {
        min(self.cursor, self.anchor)..max(self.cursor, self.anchor)
    }

    /// Set the selection. Both positions are clamped to the text.
    pub fn set_selection(&mut self, anchor: upos_type, cursor: upos_type) -> bool {
        let old = (self.cursor, self.anchor);
        let len = self.len();
        self.anchor = min(anchor, len);
        self.cursor = min(cursor, len);
        old != (self.cursor, self.anchor)
    }

    /// Select everything.
    pub fn select_all(&mut self) -> bool {
        self.set_selection(0, self.len())
    }

    /// Selected text.
    pub fn selected_text(&self) -> &str {
        str_slice(&self.text, self.selection()).expect("valid_selection")
    }
}

impl AutoFormatState {
    /// Insert a char at the cursor. Replaces the selection.
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf))
    }

    /// Insert a string at the cursor. Replaces the selection.
    ///
    /// Pasting more than the mask can hold is rejected,
    /// except at the start of the text.
    pub fn insert_str(&mut self, s: &str) -> bool {
        self.try_insert_str(s).expect("valid_selection")
    }

    /// Insert a string at the cursor. Replaces the selection.
    pub fn try_insert_str(&mut self, s: &str) -> Result<bool, TextError> {
        self.try_replace(self.selection(), s)
    }

    /// Delete the char before the cursor.
    ///
    /// Deleting a literal of the mask deletes the entered
    /// char before it too.
    pub fn delete_prev_char(&mut self) -> bool {
        if self.has_selection() {
            self.delete_range(self.selection())
        } else if self.cursor == 0 {
            false
        } else {
            self.delete_range(self.cursor - 1..self.cursor)
        }
    }

    /// Delete the char after the cursor.
    pub fn delete_next_char(&mut self) -> bool {
        if self.has_selection() {
            self.delete_range(self.selection())
        } else if self.cursor == self.len() {
            false
        } else {
            self.delete_range(self.cursor..self.cursor + 1)
        }
    }

    /// Remove the range.
    pub fn delete_range(&mut self, range: Range<upos_type>) -> bool {
        self.try_delete_range(range).expect("valid_range")
    }

    /// Remove the range.
    pub fn try_delete_range(&mut self, range: Range<upos_type>) -> Result<bool, TextError> {
        self.try_replace(range, "")
    }

    /// Apply an edit that has already been made to the text.
    ///
    /// `text_after` is the current text where `selection_length`
    /// graphemes at `selection_start` have been replaced by
    /// `replacement_length` new ones.
    ///
    /// Panics if the edit doesn't fit the current text.
    pub fn apply_change(
        &mut self,
        text_after: &str,
        selection_start: upos_type,
        selection_length: upos_type,
        replacement_length: upos_type,
    ) -> bool {
        self.try_apply_change(
            text_after,
            selection_start,
            selection_length,
            replacement_length,
        )
        .expect("valid_edit")
    }

    /// Apply an edit that has already been made to the text.
    pub fn try_apply_change(
        &mut self,
        text_after: &str,
        selection_start: upos_type,
        selection_length: upos_type,
        replacement_length: upos_type,
    ) -> Result<bool, TextError> {
        let edit = TextEdit::new(
            &self.text,
            text_after,
            selection_start,
            selection_length,
            replacement_length,
        );
        let state = reconcile(Some(&self.mask), &edit)?;
        Ok(self.apply(state))
    }

    /// Replace the range with the string and reconcile the result.
    fn try_replace(&mut self, range: Range<upos_type>, s: &str) -> Result<bool, TextError> {
        let bytes = byte_range(&self.text, range.clone())?;

        let mut text_after = String::with_capacity(self.text.len() + s.len());
        text_after.push_str(&self.text[..bytes.start]);
        text_after.push_str(s);
        text_after.push_str(&self.text[bytes.end..]);

        // s may join with its neighbours. The edit then covers
        // the merged graphemes on both sides.
        let changed = grapheme_cover(&text_after, bytes.start..bytes.start + s.len());
        let tail = str_len(&text_after) - changed.end;
        let selection_length = self.len().saturating_sub(tail).saturating_sub(changed.start);
        let replacement_length = changed.end - changed.start;

        self.try_apply_change(
            &text_after,
            changed.start,
            selection_length,
            replacement_length,
        )
    }

    fn apply(&mut self, state: EditTextState) -> bool {
        let changed = self.text != state.formatted_text || self.cursor != state.cursor;
        self.text = state.formatted_text;
        self.unformatted = state.unformatted_text;
        self.cursor = state.cursor;
        self.anchor = state.cursor;
        changed
    }
}
