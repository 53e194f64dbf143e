use crate::domain::request::{PaymentRequest, RawCard, RawField};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::io::Read;

/// Flat CSV shape: `method,vpa,card_number,expiry_month,expiry_year`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct CsvRequestRecord {
    method: Option<String>,
    vpa: Option<String>,
    card_number: Option<String>,
    expiry_month: Option<String>,
    expiry_year: Option<String>,
}

impl From<CsvRequestRecord> for PaymentRequest {
    fn from(record: CsvRequestRecord) -> Self {
        let has_card = record.card_number.is_some()
            || record.expiry_month.is_some()
            || record.expiry_year.is_some();
        Self {
            method: record.method.map(RawField::Text),
            vpa: record.vpa.map(RawField::Text),
            card: has_card.then(|| RawCard {
                number: record.card_number.map(RawField::Text),
                expiry_month: record.expiry_month.map(RawField::Text),
                expiry_year: record.expiry_year.map(RawField::Text),
            }),
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<PaymentRequest>`.
/// Whitespace is trimmed and rows may omit trailing columns.
pub struct CsvRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvRequestReader<R> {
    /// Creates a new `CsvRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and decodes requests, one per row.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<CsvRequestRecord>()
            .map(|result| result.map(PaymentRequest::from).map_err(AppError::from))
    }
}
