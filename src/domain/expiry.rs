use crate::error::{AppError, ValidationError};
use std::fmt;
use std::str::FromStr;
use time::Date;

/// A calendar month, ordered year first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses `YYYY-MM`, the format used to pin the clock from the command line.
impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::ConfigError(format!("expected YYYY-MM, got `{s}`"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || !is_ascii_digits(year) || !is_ascii_digits(month) {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

/// Card expiry as printed on the card: a month and a four-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryDate {
    month: u8,
    year: i32,
}

impl ExpiryDate {
    /// Builds an expiry from numeric parts. Years below 100 are read as 20YY.
    pub fn new(month: u8, year: u16) -> Result<Self, ValidationError> {
        let year = if year < 100 { 2000 + year } else { year };
        Self::checked(month, i32::from(year))
    }

    fn checked(month: u8, year: i32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidExpiry);
        }
        Ok(Self { month, year })
    }

    /// Builds an expiry from raw request fields.
    ///
    /// Month must be one or two digits in 1..=12; year must be exactly two
    /// digits (20YY) or four digits.
    pub fn from_parts(month: &str, year: &str) -> Result<Self, ValidationError> {
        let (month, year) = (month.trim(), year.trim());
        if month.is_empty() || month.len() > 2 || !is_ascii_digits(month) {
            return Err(ValidationError::InvalidExpiry);
        }
        if !matches!(year.len(), 2 | 4) || !is_ascii_digits(year) {
            return Err(ValidationError::InvalidExpiry);
        }
        let month = month
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidExpiry)?;
        let two_digit = year.len() == 2;
        let mut year = year
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidExpiry)?;
        if two_digit {
            year += 2000;
        }
        Self::checked(month, year)
    }

    /// Parses the checkout form's `MM/YY` (or `MM/YYYY`) rendering.
    pub fn parse_mm_yy(raw: &str) -> Result<Self, ValidationError> {
        let (month, year) = raw
            .trim()
            .split_once('/')
            .ok_or(ValidationError::InvalidExpiry)?;
        Self::from_parts(month, year)
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The card is usable through the whole of its expiry month.
    pub fn is_expired_at(&self, today: YearMonth) -> bool {
        self.year < today.year() || (self.year == today.year() && self.month < today.month())
    }

    pub fn ensure_not_expired(self, today: YearMonth) -> Result<Self, ValidationError> {
        if self.is_expired_at(today) {
            Err(ValidationError::InvalidExpiry)
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Expiry check against an explicit "today".
pub fn is_valid_expiry(month: &str, year: &str, today: YearMonth) -> bool {
    ExpiryDate::from_parts(month, year)
        .and_then(|expiry| expiry.ensure_not_expired(today))
        .is_ok()
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
