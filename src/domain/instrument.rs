use super::card::CardNumber;
use super::expiry::ExpiryDate;
use super::method::PaymentMethod;
use super::network::CardNetwork;
use super::vpa::Vpa;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiInstrument {
    pub vpa: Vpa,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInstrument {
    pub number: CardNumber,
    pub expiry: ExpiryDate,
}

impl CardInstrument {
    pub fn network(&self) -> CardNetwork {
        self.number.network()
    }

    pub fn last4(&self) -> &str {
        self.number.last4()
    }
}

/// A payment instrument that has passed every syntactic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInstrument {
    Upi(UpiInstrument),
    Card(CardInstrument),
}

impl PaymentInstrument {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::Upi(_) => PaymentMethod::Upi,
            Self::Card(_) => PaymentMethod::Card,
        }
    }
}

/// Outcome of validating one payment request.
///
/// `network` and `last4` are only present for accepted cards; `error_code`
/// only for rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<CardNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ValidationError>,
}

impl ValidationResult {
    pub fn accepted(instrument: &PaymentInstrument) -> Self {
        match instrument {
            PaymentInstrument::Upi(_) => Self {
                valid: true,
                network: None,
                last4: None,
                error_code: None,
            },
            PaymentInstrument::Card(card) => Self {
                valid: true,
                network: Some(card.network()),
                last4: Some(card.last4().to_string()),
                error_code: None,
            },
        }
    }

    pub fn rejected(error: ValidationError) -> Self {
        Self {
            valid: false,
            network: None,
            last4: None,
            error_code: Some(error),
        }
    }
}

impl From<Result<PaymentInstrument, ValidationError>> for ValidationResult {
    fn from(outcome: Result<PaymentInstrument, ValidationError>) -> Self {
        match outcome {
            Ok(instrument) => Self::accepted(&instrument),
            Err(error) => Self::rejected(error),
        }
    }
}
