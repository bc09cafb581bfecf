use thiserror::Error;

/// Rejections raised by [`LoanParameters::validate`](crate::LoanParameters::validate)
/// before any calculation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("property price must be greater than zero, got {0}")]
    NonPositivePrice(f64),
    #[error("deposit cannot be negative, got {0}")]
    NegativeDeposit(f64),
    #[error("deposit {deposit} exceeds property price {property_price}")]
    DepositExceedsPrice { deposit: f64, property_price: f64 },
    #[error("annual interest rate cannot be negative, got {0}")]
    NegativeRate(f64),
    #[error("mortgage term must be a whole number of years of at least 1, got {0}")]
    InvalidTerm(f64),
    #[error("mortgage term of {term} years exceeds the {max} year maximum")]
    TermTooLong { term: f64, max: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    #[error("environment variable {0} is not set")]
    Missing(String),
    #[error("environment variable {var} holds {value:?}, which is not a percentage")]
    Unparseable { var: String, value: String },
    #[error("rate source unavailable: {0}")]
    Unavailable(String),
}
