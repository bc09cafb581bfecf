pub mod amortization;
pub mod error;
pub mod rate;

pub use amortization::{
    calculate_affordability_check, calculate_capital, calculate_interest, calculate_mortgage,
    calculate_monthly_payment, calculate_total_repayment, calculate_yearly_breakdown,
    LoanParameters, MortgageResult, YearlySnapshot, MAX_TERM_YEARS, STRESS_RATE_OFFSET,
};
pub use error::{InputError, RateError};
pub use rate::{EnvRate, FixedRate, RateLookup, RateSource, DEFAULT_ANNUAL_RATE};
