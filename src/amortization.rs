use log::{debug, trace};
use std::fmt;

use crate::error::InputError;

/// Percentage points added to the annual rate for the affordability stress test.
pub const STRESS_RATE_OFFSET: f64 = 3.0;

/// Longest term, in years, accepted by [`LoanParameters::validate`].
pub const MAX_TERM_YEARS: f64 = 100.;

const MONTHS_PER_YEAR: f64 = 12.;

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanParameters {
    pub property_price: f64,
    pub deposit: f64,
    pub annual_interest_rate: f64, // percent, i.e. 5.25 not 0.0525
    pub mortgage_term_in_years: f64,
}

impl LoanParameters {
    pub fn new(
        property_price: f64,
        deposit: f64,
        annual_interest_rate: f64,
        mortgage_term_in_years: f64,
    ) -> Self {
        Self {
            property_price,
            deposit,
            annual_interest_rate,
            mortgage_term_in_years,
        }
    }

    /// Checks the pre-conditions the calculation functions assume but never enforce.
    ///
    /// Callers at the input boundary run this before [`LoanParameters::calculate`];
    /// the calculations themselves accept anything and let bad inputs surface as
    /// negative or non-finite numbers.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("property price", self.property_price),
            ("deposit", self.deposit),
            ("annual interest rate", self.annual_interest_rate),
            ("mortgage term", self.mortgage_term_in_years),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field, value });
            }
        }

        if self.property_price <= 0. {
            return Err(InputError::NonPositivePrice(self.property_price));
        }
        if self.deposit < 0. {
            return Err(InputError::NegativeDeposit(self.deposit));
        }
        if self.deposit > self.property_price {
            return Err(InputError::DepositExceedsPrice {
                deposit: self.deposit,
                property_price: self.property_price,
            });
        }
        if self.annual_interest_rate < 0. {
            return Err(InputError::NegativeRate(self.annual_interest_rate));
        }
        if self.mortgage_term_in_years < 1. || self.mortgage_term_in_years.fract() != 0. {
            return Err(InputError::InvalidTerm(self.mortgage_term_in_years));
        }
        if self.mortgage_term_in_years > MAX_TERM_YEARS {
            return Err(InputError::TermTooLong {
                term: self.mortgage_term_in_years,
                max: MAX_TERM_YEARS,
            });
        }
        Ok(())
    }

    pub fn calculate(&self) -> MortgageResult {
        calculate_mortgage(
            self.property_price,
            self.deposit,
            self.annual_interest_rate,
            self.mortgage_term_in_years,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearlySnapshot {
    pub year: u32,
    pub remaining_debt: f64,
}

impl YearlySnapshot {
    pub fn new(year: u32, remaining_debt: f64) -> Self {
        Self {
            year,
            remaining_debt,
        }
    }
}

impl fmt::Display for YearlySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year {}, remaining debt ${:.2}",
            self.year,
            round(self.remaining_debt, 2.)
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MortgageResult {
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub capital: f64,
    pub interest: f64,
    pub affordability_check: f64,
    pub yearly_breakdown: Vec<YearlySnapshot>,
}

impl MortgageResult {
    pub fn show_breakdown(&self) {
        for snapshot in &self.yearly_breakdown {
            println!("{}", snapshot);
        }
    }
}

impl fmt::Display for MortgageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "monthly payment ${:.2}", round(self.monthly_payment, 2.))?;
        writeln!(f, "total repayment ${:.2}", round(self.total_repayment, 2.))?;
        writeln!(f, "capital ${:.2}", round(self.capital, 2.))?;
        writeln!(f, "interest ${:.2}", round(self.interest, 2.))?;
        write!(
            f,
            "affordability check ${:.2}",
            round(self.affordability_check, 2.)
        )
    }
}

/// Rounds for display only; every stored figure keeps full precision.
pub fn round(amt: f64, dec: f64) -> f64 {
    if amt == 0. {
        0.
    } else {
        (amt * 10_f64.powf(dec)).round() / 10_f64.powf(dec)
    }
}

fn monthly_rate(annual_interest_rate: f64) -> f64 {
    annual_interest_rate / 100. / MONTHS_PER_YEAR
}

/// Fixed monthly payment that repays `property_price - deposit` over the term.
///
/// A rate of exactly zero falls back to straight-line repayment. No input is
/// validated: a zero term yields a non-finite payment and a deposit above the
/// price yields a negative one.
pub fn calculate_monthly_payment(
    property_price: f64,
    deposit: f64,
    annual_interest_rate: f64,  // annual rate as percent (i.e., 3.5, 5.25)
    mortgage_term_in_years: f64, // whole years expected
) -> f64 {
    let loan_amount = calculate_capital(property_price, deposit);
    let rate = monthly_rate(annual_interest_rate);
    let num_payments = mortgage_term_in_years * MONTHS_PER_YEAR;

    if rate == 0. {
        return loan_amount / num_payments;
    }

    let factor = (1. + rate).powf(num_payments);
    (loan_amount * rate * factor) / (factor - 1.)
}

pub fn calculate_capital(property_price: f64, deposit: f64) -> f64 {
    property_price - deposit
}

/// Nominal total: every payment over the full term at `monthly_payment`.
pub fn calculate_total_repayment(monthly_payment: f64, mortgage_term_in_years: f64) -> f64 {
    monthly_payment * mortgage_term_in_years * MONTHS_PER_YEAR
}

pub fn calculate_interest(total_repayment: f64, capital: f64) -> f64 {
    total_repayment - capital
}

/// Monthly payment at the annual rate plus [`STRESS_RATE_OFFSET`] percentage points.
pub fn calculate_affordability_check(
    property_price: f64,
    deposit: f64,
    annual_interest_rate: f64,
    mortgage_term_in_years: f64,
) -> f64 {
    calculate_monthly_payment(
        property_price,
        deposit,
        annual_interest_rate + STRESS_RATE_OFFSET,
        mortgage_term_in_years,
    )
}

/// Simulates the loan month by month and records the balance left after each
/// completed year.
///
/// One snapshot per whole year of the term; a fractional term is truncated and a
/// term below one year (or non-finite) gives an empty schedule. The balance is
/// clamped at zero so float overshoot on the final payments never reports a
/// negative debt.
pub fn calculate_yearly_breakdown(
    property_price: f64,
    deposit: f64,
    annual_interest_rate: f64,
    mortgage_term_in_years: f64,
) -> Vec<YearlySnapshot> {
    let capital = calculate_capital(property_price, deposit);
    let monthly_payment = calculate_monthly_payment(
        property_price,
        deposit,
        annual_interest_rate,
        mortgage_term_in_years,
    );
    let rate = monthly_rate(annual_interest_rate);

    let whole_years = if mortgage_term_in_years.is_finite() && mortgage_term_in_years >= 1. {
        mortgage_term_in_years.floor() as u32
    } else {
        0
    };

    project_yearly_balances(capital, monthly_payment, rate, whole_years)
}

// balance left after each year of paying `monthly_payment` against `capital`
fn project_yearly_balances(
    capital: f64,
    monthly_payment: f64,
    rate: f64, // monthly rate as decimal
    whole_years: u32,
) -> Vec<YearlySnapshot> {
    let mut breakdown: Vec<YearlySnapshot> = Vec::new();
    let mut remaining_balance = capital;

    for year in 1..=whole_years {
        for month in 1..=12 {
            let interest_portion = remaining_balance * rate;
            let principal_portion = monthly_payment - interest_portion;
            remaining_balance -= principal_portion;

            if remaining_balance < 0. {
                remaining_balance = 0.;
            }
            trace!(
                "year {}, month {}, interest {}, principal {}, balance {}",
                year,
                month,
                interest_portion,
                principal_portion,
                remaining_balance
            );
        }
        breakdown.push(YearlySnapshot::new(year, remaining_balance));
    }
    breakdown
}

/// Runs every calculation on the same four inputs and gathers the results.
pub fn calculate_mortgage(
    property_price: f64,
    deposit: f64,
    annual_interest_rate: f64,
    mortgage_term_in_years: f64,
) -> MortgageResult {
    let monthly_payment = calculate_monthly_payment(
        property_price,
        deposit,
        annual_interest_rate,
        mortgage_term_in_years,
    );
    let capital = calculate_capital(property_price, deposit);
    let total_repayment = calculate_total_repayment(monthly_payment, mortgage_term_in_years);
    let interest = calculate_interest(total_repayment, capital);
    let affordability_check = calculate_affordability_check(
        property_price,
        deposit,
        annual_interest_rate,
        mortgage_term_in_years,
    );
    let yearly_breakdown = calculate_yearly_breakdown(
        property_price,
        deposit,
        annual_interest_rate,
        mortgage_term_in_years,
    );
    debug!(
        "payment {}, total {}, stressed payment {}",
        monthly_payment, total_repayment, affordability_check
    );

    MortgageResult {
        monthly_payment,
        total_repayment,
        capital,
        interest,
        affordability_check,
        yearly_breakdown,
    }
}
