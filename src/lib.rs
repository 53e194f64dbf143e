pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::validator::InstrumentValidator;
pub use domain::card::{clean_card_number, is_valid_card_number, luhn_checksum_valid};
pub use domain::expiry::{ExpiryDate, YearMonth, is_valid_expiry};
pub use domain::instrument::ValidationResult;
pub use domain::network::{CardNetwork, detect_network};
pub use domain::request::PaymentRequest;
pub use domain::vpa::is_valid_vpa;
pub use error::ValidationError;
