//! Input mask for auto-formatting text.
//!
//! The mask is a plain string. Every occurrence of the placeholder
//! char marks a slot for one user-entered grapheme, everything else
//! is a literal that is inserted verbatim.
//!
//! * `(###) ###-####` with placeholder `#`: a phone number.
//! * `##/##/####`: a date.
//!
//! The mask converts between two representations of the same content:
//!
//! * unformatted text: only the graphemes the user entered.
//! * formatted text: the unformatted text with the literals inserted.
//!
//! ```rust
//! use rat_autoformat::InputMask;
//!
//! let mask = InputMask::new(Some("(###) ###-####"), '#');
//! assert_eq!(mask.format_text("5551234"), "(555) 123-4");
//! assert_eq!(mask.unformat_text("(555) 123-4", 0, 11).expect("valid_range"), "5551234");
//! ```
//!
//! There is no validation of the entered graphemes. Anything goes
//! into a placeholder slot.
//!

use crate::_private::NonExhaustive;
use crate::grapheme::byte_range;
use crate::input_mask::mask_token::MaskToken;
use crate::{upos_type, TextError, DEFAULT_PLACEHOLDER};
use unicode_segmentation::UnicodeSegmentation;

pub mod mask_token;

/// Configuration for an input mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskConfig {
    /// Mask pattern. None disables masking.
    pub pattern: Option<String>,
    /// Placeholder char in the pattern.
    pub placeholder: char,

    pub non_exhaustive: NonExhaustive,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            placeholder: DEFAULT_PLACEHOLDER,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl MaskConfig {
    /// Configuration with the given pattern and the default placeholder.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Default::default()
        }
    }

    /// Placeholder char.
    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Takes the first char of a configured placeholder string.
    /// Uses the default `#` if there is none.
    pub fn parse_placeholder(placeholder: Option<&str>) -> char {
        placeholder
            .and_then(|v| v.chars().next())
            .unwrap_or(DEFAULT_PLACEHOLDER)
    }
}

/// Parsed input mask.
///
/// Without a pattern, or with an empty one, masking is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMask {
    pattern: Option<String>,
    placeholder: char,
    // parsed pattern
    tokens: Vec<MaskToken>,
    // number of placeholders
    unformatted_len: upos_type,
}

impl Default for InputMask {
    fn default() -> Self {
        Self {
            pattern: None,
            placeholder: DEFAULT_PLACEHOLDER,
            tokens: Vec::new(),
            unformatted_len: 0,
        }
    }
}

impl InputMask {
    /// New mask. None means no masking.
    pub fn new(pattern: Option<&str>, placeholder: char) -> Self {
        let mut mask = Self {
            placeholder,
            ..Default::default()
        };
        if let Some(pattern) = pattern {
            mask.set_mask(pattern);
        }
        mask
    }

    /// New mask from a configuration.
    pub fn from_config(cfg: &MaskConfig) -> Self {
        Self::new(cfg.pattern.as_deref(), cfg.placeholder)
    }

    /// Replace the pattern.
    ///
    /// Any text formatted with the old pattern must be unformatted
    /// before calling this, and truncated to the new [unformatted_len](Self::unformatted_len)
    /// afterward. [AutoFormatState](crate::AutoFormatState) does all this.
    pub fn set_mask<S: AsRef<str>>(&mut self, pattern: S) {
        let pattern = pattern.as_ref();
        self.tokens = Self::parse_mask(pattern, self.placeholder);
        self.unformatted_len = self
            .tokens
            .iter()
            .filter(|v| v.is_placeholder())
            .count() as upos_type;
        self.pattern = Some(pattern.to_string());
    }

    /// Remove the pattern. This disables masking.
    pub fn clear_mask(&mut self) {
        self.pattern = None;
        self.tokens.clear();
        self.unformatted_len = 0;
    }

    fn parse_mask(pattern: &str, placeholder: char) -> Vec<MaskToken> {
        pattern
            .graphemes(true)
            .map(|g| MaskToken::parse(g, placeholder))
            .collect()
    }

    /// Current pattern.
    #[inline]
    pub fn mask(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    #[inline]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Parsed pattern.
    #[inline]
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Length of the pattern in graphemes.
    /// This is the maximum length of the formatted text.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.tokens.len() as upos_type
    }

    /// Empty or no pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Masking is active if there is a non-empty pattern.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Number of placeholders in the pattern.
    /// This is the maximum length of the unformatted text.
    #[inline]
    pub fn unformatted_len(&self) -> upos_type {
        self.unformatted_len
    }

    /// Is there a placeholder at the given position of the pattern.
    /// Positions beyond the pattern are never placeholders.
    #[inline]
    pub fn is_placeholder(&self, pos: upos_type) -> bool {
        self.tokens
            .get(pos as usize)
            .map(|v| v.is_placeholder())
            .unwrap_or(false)
    }

    /// Extract the user-entered graphemes from the range `from..to` of a
    /// formatted text.
    ///
    /// A grapheme is kept if the pattern has a placeholder at the same
    /// position. Graphemes at literal positions or beyond the end of the
    /// pattern are dropped.
    ///
    /// Fails if the range is not within the source text.
    pub fn unformat_text(
        &self,
        source: &str,
        from: upos_type,
        to: upos_type,
    ) -> Result<String, TextError> {
        let bytes = byte_range(source, from..to)?;

        let mut unformatted = String::new();
        for (pos, g) in (from..to).zip(source[bytes].graphemes(true)) {
            if self.is_placeholder(pos) {
                unformatted.push_str(g);
            }
        }
        Ok(unformatted)
    }

    /// Insert the unformatted text into the pattern.
    ///
    /// Literals are copied, each placeholder takes the next grapheme
    /// of the unformatted text. Stops at the first placeholder that
    /// can't be filled, so the result is always a prefix of a fully
    /// formatted text. Excess unformatted graphemes are ignored.
    pub fn format_text(&self, unformatted: &str) -> String {
        let mut it = unformatted.graphemes(true);

        let mut formatted = String::new();
        for t in &self.tokens {
            match t {
                MaskToken::Literal(s) => formatted.push_str(s),
                MaskToken::Placeholder => {
                    if let Some(g) = it.next() {
                        formatted.push_str(g);
                    } else {
                        break;
                    }
                }
            }
        }
        formatted
    }

    /// The text has the full length of the pattern and all literals
    /// are in place.
    pub fn matches(&self, formatted: &str) -> bool {
        let mut it = formatted.graphemes(true);
        for t in &self.tokens {
            match (t, it.next()) {
                (_, None) => return false,
                (MaskToken::Placeholder, Some(_)) => {}
                (MaskToken::Literal(s), Some(g)) => {
                    if s.as_ref() != g {
                        return false;
                    }
                }
            }
        }
        it.next().is_none()
    }
}
