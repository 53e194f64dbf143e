use super::network::{CardNetwork, detect_network};
use crate::error::ValidationError;
use std::fmt;
use std::ops::RangeInclusive;

pub const CARD_NUMBER_LENGTH: RangeInclusive<usize> = 13..=19;

/// Removes the separators a customer might type: whitespace and hyphens.
pub fn clean_card_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Luhn (mod 10) checksum over a string of ASCII digits.
///
/// Returns `false` if any character is not a digit.
pub fn luhn_checksum_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(b - b'0');
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Full card-number check: clean, enforce 13-19 digits, then Luhn.
pub fn is_valid_card_number(raw: &str) -> bool {
    CardNumber::parse(raw).is_ok()
}

/// A cleaned, Luhn-valid primary account number.
///
/// `Debug` and `Display` only ever show the masked form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let cleaned = clean_card_number(raw);
        if !CARD_NUMBER_LENGTH.contains(&cleaned.len())
            || !cleaned.bytes().all(|b| b.is_ascii_digit())
            || !luhn_checksum_valid(&cleaned)
        {
            return Err(ValidationError::InvalidCardNumber);
        }
        Ok(Self(cleaned))
    }

    /// Exposes the full digits. Callers must not log or persist this.
    pub fn peek(&self) -> &str {
        &self.0
    }

    pub fn last4(&self) -> &str {
        &self.0[self.0.len() - 4..]
    }

    pub fn network(&self) -> CardNetwork {
        detect_network(&self.0)
    }

    /// All but the last four digits replaced by `*`, grouped in fours.
    pub fn masked(&self) -> String {
        let visible_from = self.0.len() - 4;
        let mut out = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(if i < visible_from { '*' } else { c });
        }
        out
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
