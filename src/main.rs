use clap::Parser;
use log::{info, LevelFilter};
use mortgage::rate::{EnvRate, RateLookup, DEFAULT_ANNUAL_RATE, DEFAULT_RATE_VAR};
use mortgage::LoanParameters;
use simple_logger::SimpleLogger;

/// Monthly repayment, totals and yearly balance schedule for a fixed-rate mortgage.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Property price
    #[arg(long)]
    price: f64,

    /// Deposit paid up front
    #[arg(long, default_value_t = 0.)]
    deposit: f64,

    /// Annual interest rate in percent; looked up from the environment when omitted
    #[arg(long)]
    rate: Option<f64>,

    /// Mortgage term in whole years
    #[arg(long, default_value_t = 25.)]
    term: f64,

    /// Environment variable holding the current rate
    #[arg(long, default_value = DEFAULT_RATE_VAR)]
    rate_var: String,

    /// Rate used when the lookup fails
    #[arg(long, default_value_t = DEFAULT_ANNUAL_RATE)]
    fallback_rate: f64,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    SimpleLogger::new().with_level(args.log_level).init()?;

    let annual_rate = match args.rate {
        Some(rate) => rate,
        None => RateLookup::new(EnvRate::new(args.rate_var), args.fallback_rate).annual_rate(),
    };

    let params = LoanParameters::new(args.price, args.deposit, annual_rate, args.term);
    params.validate()?;
    info!(
        "price {}, deposit {}, rate {}%, term {} years",
        params.property_price,
        params.deposit,
        params.annual_interest_rate,
        params.mortgage_term_in_years
    );

    let result = params.calculate();
    println!("{}", result);
    result.show_breakdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::CommandFactory;

    // records handed between the CLI and the library stay plain data
    fn is_normal<T: Sized + Send + Sync + Unpin>() {}

    #[test]
    fn normal_types() {
        is_normal::<mortgage::LoanParameters>();
        is_normal::<mortgage::MortgageResult>();
        is_normal::<mortgage::YearlySnapshot>();
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }
}
