//! Envelope operation for the loan calculator: display rounding, totals,
//! optional schedule, and warnings for unusual inputs.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::emi::{monthly_installment, LoanParameters};
use crate::loan::schedule::{amortization_schedule, total_interest, AmortizationRow};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::EstateResult;

/// Loan analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Full property price, rupees
    pub price: Money,
    /// Percentage of the price paid upfront
    #[serde(default)]
    pub down_payment_percent: Rate,
    /// Loan tenure in years; fractional values are valid
    pub tenure_years: Decimal,
    /// Annual interest rate as a percentage
    pub annual_rate_percent: Rate,
    /// Include the month-by-month schedule in the output
    #[serde(default)]
    pub include_schedule: bool,
}

/// Loan analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanOutput {
    /// Monthly installment rounded to the nearest rupee for display
    pub emi: Money,
    /// Unrounded installment
    pub emi_exact: Money,
    pub financed_principal: Money,
    pub down_payment: Money,
    pub months: u32,
    pub total_payment: Money,
    pub total_interest: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

/// Analyze a home loan: EMI, totals, and optionally the full schedule.
pub fn analyze_loan(input: &LoanInput) -> EstateResult<ComputationOutput<LoanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let params = LoanParameters {
        principal_total: input.price,
        down_payment_percent: input.down_payment_percent,
        tenure_years: input.tenure_years,
        annual_rate_percent: input.annual_rate_percent,
    };

    if input.annual_rate_percent > dec!(15) {
        warnings.push(format!(
            "Interest rate {}% is unusually high for a home loan — verify the quote",
            input.annual_rate_percent
        ));
    }
    if input.tenure_years > dec!(30) {
        warnings.push(format!(
            "Tenure of {} years exceeds typical lender maximums",
            input.tenure_years
        ));
    }
    if input.down_payment_percent < dec!(10) && input.price > Decimal::ZERO {
        warnings.push("Loan-to-value above 90% — most lenders require a larger down payment".into());
    }

    let emi_exact = monthly_installment(&params)?;
    let rows = amortization_schedule(&params)?;
    let total_int = total_interest(&rows);
    let financed = params.financed_principal().max(Decimal::ZERO);
    let total_payment = if rows.is_empty() {
        Decimal::ZERO
    } else {
        financed + total_int
    };

    let output = LoanOutput {
        emi: emi_exact.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        emi_exact,
        financed_principal: financed,
        down_payment: input.price - financed,
        months: params.months(),
        total_payment,
        total_interest: total_int,
        schedule: if input.include_schedule { Some(rows) } else { None },
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Equated Monthly Installment (reducing balance)",
        input,
        warnings,
        elapsed,
        output,
    ))
}
