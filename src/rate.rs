use log::{info, warn};
use std::env;

use crate::error::RateError;

/// Annual rate, in percent, used whenever a rate lookup fails.
pub const DEFAULT_ANNUAL_RATE: f64 = 5.25;

pub const DEFAULT_RATE_VAR: &str = "MORTGAGE_INTEREST_RATE";

/// Anything able to quote a current annual interest rate as a percentage.
pub trait RateSource {
    fn annual_rate(&self) -> Result<f64, RateError>;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FixedRate(pub f64);

impl RateSource for FixedRate {
    fn annual_rate(&self) -> Result<f64, RateError> {
        Ok(self.0)
    }
}

/// Reads the rate from an environment variable, e.g. `MORTGAGE_INTEREST_RATE=4.75`.
#[derive(Clone, PartialEq, Debug)]
pub struct EnvRate {
    var: String,
}

impl EnvRate {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    fn parse(&self, value: &str) -> Result<f64, RateError> {
        value
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| RateError::Unparseable {
                var: self.var.clone(),
                value: value.to_string(),
            })
    }
}

impl Default for EnvRate {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_VAR)
    }
}

impl RateSource for EnvRate {
    fn annual_rate(&self) -> Result<f64, RateError> {
        match env::var(&self.var) {
            Ok(value) => self.parse(&value),
            Err(_) => Err(RateError::Missing(self.var.clone())),
        }
    }
}

/// Wraps a [`RateSource`] so callers always get a usable rate.
///
/// Any error, negative or non-finite quote from the source is replaced by the fallback.
pub struct RateLookup<S> {
    source: S,
    fallback: f64,
}

impl<S: RateSource> RateLookup<S> {
    pub fn new(source: S, fallback: f64) -> Self {
        Self { source, fallback }
    }

    pub fn with_default_fallback(source: S) -> Self {
        Self::new(source, DEFAULT_ANNUAL_RATE)
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn annual_rate(&self) -> f64 {
        match self.source.annual_rate() {
            Ok(rate) if rate.is_finite() && rate >= 0. => {
                info!("using quoted annual rate {}%", rate);
                rate
            }
            Ok(rate) => {
                warn!(
                    "rate source quoted {}, falling back to {}%",
                    rate, self.fallback
                );
                self.fallback
            }
            Err(e) => {
                warn!("{}, falling back to {}%", e, self.fallback);
                self.fallback
            }
        }
    }
}
