use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use estate_core::loan::{analyze_loan, LoanInput};

use crate::input;

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Full property price, rupees
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment as a percentage of the price
    #[arg(long, default_value = "20")]
    pub down_payment: Decimal,

    /// Loan tenure in years (fractional values allowed, e.g. 12.5)
    #[arg(long)]
    pub tenure_years: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 8.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Include the month-by-month amortization schedule
    #[arg(long)]
    pub schedule: bool,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment_percent: args.down_payment,
            tenure_years: args
                .tenure_years
                .ok_or("--tenure-years is required (or provide --input)")?,
            annual_rate_percent: args.rate.unwrap_or(dec!(8.5)),
            include_schedule: args.schedule,
        }
    };

    if args.schedule {
        loan_input.include_schedule = true;
    }

    let output = analyze_loan(&loan_input)?;
    Ok(serde_json::to_value(output)?)
}
