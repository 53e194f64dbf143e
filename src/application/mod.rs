//! Application layer orchestrating the domain checks.
//!
//! This module defines the `InstrumentValidator`, which maps raw request
//! fields onto the domain value objects and reports a single
//! `ValidationResult` per payment attempt.

pub mod validator;
