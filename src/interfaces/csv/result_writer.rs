use crate::domain::network::CardNetwork;
use crate::error::{Result, ValidationError};
use crate::interfaces::{ResultSink, RowResult};
use serde::Serialize;
use std::io::Write;

// csv cannot serialize flattened structs, so rows are written through this
// fixed-width mirror of `RowResult`.
#[derive(Serialize)]
struct CsvResultRecord<'a> {
    row: u64,
    method: &'a str,
    valid: bool,
    network: Option<CardNetwork>,
    last4: Option<&'a str>,
    error_code: Option<ValidationError>,
}

impl<'a> From<&'a RowResult> for CsvResultRecord<'a> {
    fn from(row: &'a RowResult) -> Self {
        Self {
            row: row.row,
            method: row.method.as_deref().unwrap_or(""),
            valid: row.result.valid,
            network: row.result.network,
            last4: row.result.last4.as_deref(),
            error_code: row.result.error_code,
        }
    }
}

/// Writes results as CSV with header `row,method,valid,network,last4,error_code`.
pub struct CsvResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ResultSink for CsvResultWriter<W> {
    fn write_result(&mut self, row: &RowResult) -> Result<()> {
        self.writer.serialize(CsvResultRecord::from(row))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::ValidationResult;

    fn render(rows: &[RowResult]) -> String {
        let mut writer = CsvResultWriter::new(Vec::new());
        for row in rows {
            writer.write_result(row).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_writes_header_and_rows() {
        let rows = vec![
            RowResult {
                row: 1,
                method: Some("card".to_string()),
                result: ValidationResult {
                    valid: true,
                    network: Some(CardNetwork::Visa),
                    last4: Some("0366".to_string()),
                    error_code: None,
                },
            },
            RowResult {
                row: 2,
                method: Some("upi".to_string()),
                result: ValidationResult::rejected(ValidationError::MalformedVpa),
            },
            RowResult {
                row: 3,
                method: None,
                result: ValidationResult::rejected(ValidationError::UnsupportedMethod),
            },
        ];

        let output = render(&rows);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "row,method,valid,network,last4,error_code");
        assert_eq!(lines[1], "1,card,true,visa,0366,");
        assert_eq!(lines[2], "2,upi,false,,,MALFORMED_VPA");
        assert_eq!(lines[3], "3,,false,,,UNSUPPORTED_METHOD");
    }
}
