use super::expiry::YearMonth;

/// Source of "now" for expiry checks.
///
/// Injected so that validation is deterministic under test.
pub trait Clock: Send + Sync {
    fn today(&self) -> YearMonth;
}

pub type ClockBox = Box<dyn Clock>;
