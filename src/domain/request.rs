use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// One raw request-body field as the client sent it.
///
/// `Unreadable` means the field was present but of a JSON type the field can
/// never hold (e.g. `"vpa": 123`); the validator rejects it with the tag for
/// that field rather than failing the whole body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    Text(String),
    Unreadable,
}

impl RawField {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Unreadable => None,
        }
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Raw, untrusted request-body fields for a payment attempt.
///
/// Every field is optional here; presence and type are enforced by the
/// validator so that a bad field maps to the right rejection tag instead of a
/// decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    #[serde(deserialize_with = "text_field")]
    pub method: Option<RawField>,
    #[serde(deserialize_with = "text_field")]
    pub vpa: Option<RawField>,
    #[serde(deserialize_with = "card_field")]
    pub card: Option<RawCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawCard {
    #[serde(deserialize_with = "text_field")]
    pub number: Option<RawField>,
    #[serde(deserialize_with = "text_or_integer_field")]
    pub expiry_month: Option<RawField>,
    #[serde(deserialize_with = "text_or_integer_field")]
    pub expiry_year: Option<RawField>,
}

impl PaymentRequest {
    pub fn upi(vpa: impl Into<String>) -> Self {
        Self {
            method: Some("upi".into()),
            vpa: Some(RawField::Text(vpa.into())),
            card: None,
        }
    }

    pub fn card(
        number: impl Into<String>,
        expiry_month: impl Into<String>,
        expiry_year: impl Into<String>,
    ) -> Self {
        Self {
            method: Some("card".into()),
            vpa: None,
            card: Some(RawCard {
                number: Some(RawField::Text(number.into())),
                expiry_month: Some(RawField::Text(expiry_month.into())),
                expiry_year: Some(RawField::Text(expiry_year.into())),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyValue {
    String(String),
    Integer(i64),
    Other(IgnoredAny),
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<RawField>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<AnyValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        AnyValue::String(s) => RawField::Text(s),
        AnyValue::Integer(_) | AnyValue::Other(_) => RawField::Unreadable,
    }))
}

// Checkout clients send expiry parts either as "03" or as 3.
fn text_or_integer_field<'de, D>(deserializer: D) -> Result<Option<RawField>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<AnyValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        AnyValue::String(s) => RawField::Text(s),
        AnyValue::Integer(n) => RawField::Text(n.to_string()),
        AnyValue::Other(_) => RawField::Unreadable,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyCard {
    Card(RawCard),
    Other(IgnoredAny),
}

// A `card` that is not an object carries no usable number.
fn card_field<'de, D>(deserializer: D) -> Result<Option<RawCard>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<AnyCard>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        AnyCard::Card(card) => card,
        AnyCard::Other(_) => RawCard {
            number: Some(RawField::Unreadable),
            ..Default::default()
        },
    }))
}
