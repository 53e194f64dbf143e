//! Batch surfaces: decoding raw payment requests and encoding results.

pub mod csv;
pub mod jsonl;

use crate::domain::instrument::ValidationResult;
use crate::domain::request::{PaymentRequest, RawField};
use crate::error::Result;
use serde::Serialize;

/// One validated input row, numbered from 1 in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowResult {
    pub row: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl RowResult {
    pub fn new(row: u64, request: &PaymentRequest, result: ValidationResult) -> Self {
        Self {
            row,
            method: request
                .method
                .as_ref()
                .and_then(RawField::text)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            result,
        }
    }
}

/// Destination for per-row results.
pub trait ResultSink {
    fn write_result(&mut self, row: &RowResult) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}
