use crate::{upos_type, TextError};
use std::cmp::max;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Length of the text in graphemes.
pub(crate) fn str_len(s: &str) -> upos_type {
    s.graphemes(true).count() as upos_type
}

/// Map a grapheme range to a byte range.
///
/// The position after the last grapheme is valid too.
pub(crate) fn byte_range(s: &str, range: Range<upos_type>) -> Result<Range<usize>, TextError> {
    if range.start > range.end {
        return Err(TextError::TextRangeInvalid(range.start, range.end));
    }

    let mut start = None;
    let mut end = None;
    let mut len = 0;
    for (idx, (byte, _)) in s.grapheme_indices(true).enumerate() {
        let idx = idx as upos_type;
        if idx == range.start {
            start = Some(byte);
        }
        if idx == range.end {
            end = Some(byte);
            break;
        }
        len = idx + 1;
    }
    if end.is_none() {
        // didn't break, len is the full length.
        if range.start == len {
            start = Some(s.len());
        }
        if range.end == len {
            end = Some(s.len());
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => Ok(start..end),
        _ => Err(TextError::TextRangeOutOfBounds(
            range.start,
            range.end,
            str_len(s),
        )),
    }
}

/// Slice of the text for a grapheme range.
pub(crate) fn str_slice(s: &str, range: Range<upos_type>) -> Result<&str, TextError> {
    let bytes = byte_range(s, range)?;
    Ok(&s[bytes])
}

/// Smallest grapheme range that covers the byte range.
///
/// An empty byte range inside a grapheme covers that grapheme.
pub(crate) fn grapheme_cover(s: &str, bytes: Range<usize>) -> Range<upos_type> {
    let mut start = None;
    let mut end = 0;
    let mut len = 0;
    for (idx, (byte, g)) in s.grapheme_indices(true).enumerate() {
        let idx = idx as upos_type;
        if start.is_none() && byte + g.len() > bytes.start {
            start = Some(idx);
        }
        if byte < bytes.end {
            end = idx + 1;
        }
        len = idx + 1;
    }
    let start = start.unwrap_or(len);
    start..max(start, end)
}

/// Truncate the text to at most `n` graphemes.
pub(crate) fn truncate(s: &mut String, n: upos_type) {
    if let Some((byte, _)) = s.grapheme_indices(true).nth(n as usize) {
        s.truncate(byte);
    }
}

/// Remove the last grapheme.
pub(crate) fn pop(s: &mut String) {
    if let Some((byte, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(byte);
    }
}
