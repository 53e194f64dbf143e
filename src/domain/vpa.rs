use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static VPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9]+$").expect("valid regex"));

/// Purely syntactic check of a UPI handle: `local-part@handle`.
///
/// No lookup against any PSP is performed.
pub fn is_valid_vpa(vpa: &str) -> bool {
    VPA_RE.is_match(vpa)
}

/// A syntactically valid Virtual Payment Address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vpa(String);

impl Vpa {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid_vpa(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::MalformedVpa)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// The PSP handle after the `@`, e.g. `okaxis`.
    pub fn handle(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // exactly one '@' is guaranteed by the regex
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl TryFrom<String> for Vpa {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vpa> for String {
    fn from(vpa: Vpa) -> Self {
        vpa.0
    }
}

impl fmt::Display for Vpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
