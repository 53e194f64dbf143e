use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Rupay,
    Unknown,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Rupay => "rupay",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a cleaned digit string by its IBIN prefix.
///
/// Rules are tried in order and the first match wins:
/// `4` is Visa, `51`-`55` Mastercard, `34`/`37` Amex, `60`/`65`/`81`-`89` RuPay.
pub fn detect_network(digits: &str) -> CardNetwork {
    if digits.starts_with('4') {
        return CardNetwork::Visa;
    }

    let first_two = digits
        .get(..2)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|prefix| prefix.parse::<u8>().ok());

    match first_two {
        Some(51..=55) => CardNetwork::Mastercard,
        Some(34 | 37) => CardNetwork::Amex,
        Some(60 | 65 | 81..=89) => CardNetwork::Rupay,
        _ => CardNetwork::Unknown,
    }
}
