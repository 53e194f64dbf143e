use crate::domain::card::CardNumber;
use crate::domain::expiry::{ExpiryDate, YearMonth};
use crate::domain::instrument::{
    CardInstrument, PaymentInstrument, UpiInstrument, ValidationResult,
};
use crate::domain::method::PaymentMethod;
use crate::domain::ports::ClockBox;
use crate::domain::request::{PaymentRequest, RawCard, RawField};
use crate::domain::vpa::Vpa;
use crate::error::ValidationError;
use tracing::debug;

/// Entry point used by request handlers to vet a payment attempt.
///
/// `InstrumentValidator` owns nothing but its clock, so a single instance can
/// be shared across threads and called any number of times with the same
/// outcome for the same input and month.
pub struct InstrumentValidator {
    clock: ClockBox,
}

impl InstrumentValidator {
    /// Creates a new `InstrumentValidator`.
    ///
    /// # Arguments
    ///
    /// * `clock` - Supplies the current month for expiry checks.
    pub fn new(clock: ClockBox) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> YearMonth {
        self.clock.today()
    }

    /// Validates a raw request and shapes the outcome for the caller.
    pub fn validate(&self, request: &PaymentRequest) -> ValidationResult {
        let outcome = self.parse(request);
        match &outcome {
            Ok(instrument) => debug!(method = %instrument.method(), "instrument accepted"),
            Err(err) => debug!(
                method = field_text(&request.method).unwrap_or(""),
                code = err.code(),
                "instrument rejected"
            ),
        }
        outcome.into()
    }

    /// Turns raw request fields into a typed instrument.
    ///
    /// Cards are checked number first, then expiry.
    pub fn parse(&self, request: &PaymentRequest) -> Result<PaymentInstrument, ValidationError> {
        let method: PaymentMethod = field_text(&request.method)
            .ok_or(ValidationError::UnsupportedMethod)?
            .parse()?;

        match method {
            PaymentMethod::Upi => self
                .validate_upi(field_text(&request.vpa))
                .map(PaymentInstrument::Upi),
            PaymentMethod::Card => self
                .validate_card(request.card.as_ref())
                .map(PaymentInstrument::Card),
        }
    }

    pub fn validate_upi(&self, vpa: Option<&str>) -> Result<UpiInstrument, ValidationError> {
        let vpa = Vpa::parse(vpa.ok_or(ValidationError::MalformedVpa)?)?;
        Ok(UpiInstrument { vpa })
    }

    pub fn validate_card(&self, card: Option<&RawCard>) -> Result<CardInstrument, ValidationError> {
        let card = card.ok_or(ValidationError::InvalidCardNumber)?;
        let number = CardNumber::parse(
            field_text(&card.number).ok_or(ValidationError::InvalidCardNumber)?,
        )?;

        let (Some(month), Some(year)) = (field_text(&card.expiry_month), field_text(&card.expiry_year))
        else {
            return Err(ValidationError::InvalidExpiry);
        };
        let expiry = ExpiryDate::from_parts(month, year)?.ensure_not_expired(self.today())?;

        Ok(CardInstrument { number, expiry })
    }
}

// Missing and unreadable fields are rejected alike.
fn field_text(field: &Option<RawField>) -> Option<&str> {
    field.as_ref().and_then(RawField::text)
}
