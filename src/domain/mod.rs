//! Payment-instrument value objects and the pure checks behind them.
//!
//! Nothing in this module performs I/O. The only outside dependency is the
//! [`ports::Clock`] used to decide whether a card has expired.

pub mod card;
pub mod expiry;
pub mod instrument;
pub mod method;
pub mod network;
pub mod ports;
pub mod request;
pub mod vpa;
