//! Validation errors raised by record hooks.

use commerce_host::RecordId;
use thiserror::Error;

/// Reasons the host rejects a record payload.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid country code: {0:?}")]
    InvalidCountryCode(String),

    #[error("invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("at most one supported currency can be the default, found {0}")]
    MultipleDefaultCurrencies(usize),

    #[error("unknown product category {0}")]
    UnknownCategory(RecordId),

    #[error("variant {variant:?} uses option {option:?} with value {value:?}, which the product does not declare")]
    UndeclaredOptionValue {
        variant: String,
        option: String,
        value: String,
    },

    #[error("a link must join exactly two modules, got {0}")]
    LinkArity(usize),

    #[error("lookup failed: {0}")]
    Lookup(String),
}

/// Two ASCII letters, either case ("dk", "DK").
pub(crate) fn check_country_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCountryCode(code.to_string()))
    }
}

/// Three lowercase ASCII letters ("eur").
pub(crate) fn check_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrencyCode(code.to_string()))
    }
}

pub(crate) fn check_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty(field))
    } else {
        Ok(())
    }
}
