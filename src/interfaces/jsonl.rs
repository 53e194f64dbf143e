use crate::domain::request::PaymentRequest;
use crate::error::{AppError, Result};
use crate::interfaces::{ResultSink, RowResult};
use std::io::{BufRead, BufReader, Read, Write};

/// Reads one JSON request body per line. Blank lines are skipped.
pub struct JsonlRequestReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> JsonlRequestReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| -> Result<PaymentRequest> {
                let line = line?;
                serde_json::from_str(&line).map_err(AppError::from)
            })
    }
}

/// Writes one JSON object per result: `{"row":1,"method":"card","valid":true,...}`.
pub struct JsonlResultWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonlResultWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonlResultWriter<W> {
    fn write_result(&mut self, row: &RowResult) -> Result<()> {
        serde_json::to_writer(&mut self.writer, row)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
