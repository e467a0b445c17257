//! Text-mode gate and rasterizer.
//!
//! Messages are limited to upper-case letters, digits and spaces, at most
//! [`MAX_TEXT_LEN`] characters. A [`ValidatedText`] can only be obtained
//! through [`validate`], so the rasterizer never sees unchecked input.

use std::fmt;

use signrom_model::BitSequence;

use crate::error::ValidationError;

/// Maximum number of characters in a sign message.
pub const MAX_TEXT_LEN: usize = 20;

/// A message that passed [`validate`]. Stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedText(String);

impl ValidatedText {
    /// The upper-cased message.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the message is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ValidatedText {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

/// Whether `ch` may appear on the sign.
#[must_use]
pub const fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == ' '
}

/// Check a candidate message.
///
/// The character set is checked on the upper-cased candidate before the
/// length, so a long string with a bad character reports the character.
pub fn validate(candidate: &str) -> Result<ValidatedText, ValidationError> {
    let upper = candidate.to_uppercase();

    if let Some((position, ch)) = upper.chars().enumerate().find(|&(_, ch)| !is_allowed_char(ch)) {
        return Err(ValidationError::InvalidCharacter { ch, position });
    }

    let length = upper.chars().count();
    if length > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            length,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(ValidatedText(upper))
}

/// Render a message as the bits of its bytes, MSB-first, in character order.
///
/// The result is not truncated: a message longer than eight characters yields
/// more than 64 bits, of which the 8×8 path only reads the first 64.
#[must_use]
pub fn rasterize(text: &ValidatedText) -> BitSequence {
    BitSequence::from_bytes(text.as_str().to_uppercase().as_bytes())
}
