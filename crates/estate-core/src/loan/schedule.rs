//! Month-by-month amortization schedule for a fixed-installment loan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::loan::emi::{monthly_installment, LoanParameters};
use crate::types::Money;
use crate::EstateResult;

/// One month of the repayment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number (1-indexed)
    pub month: u32,
    pub opening_balance: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

/// Build the full repayment schedule.
///
/// The final row absorbs any residual from installment precision so the
/// closing balance lands at exactly zero. Degenerate loans (zero tenure or
/// nothing financed) produce an empty schedule.
pub fn amortization_schedule(params: &LoanParameters) -> EstateResult<Vec<AmortizationRow>> {
    let emi = monthly_installment(params)?;
    if emi.is_zero() {
        return Ok(Vec::new());
    }

    let r = params.monthly_rate();
    let n = params.months();
    let mut balance = params.financed_principal();
    let mut rows = Vec::with_capacity(n as usize);

    for month in 1..=n {
        let interest = balance * r;
        let principal = if month == n {
            balance
        } else {
            emi - interest
        };
        let closing = balance - principal;

        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            interest,
            principal,
            closing_balance: closing,
        });

        balance = closing;
    }

    Ok(rows)
}

/// Total interest paid over the life of the loan.
pub fn total_interest(rows: &[AmortizationRow]) -> Money {
    rows.iter().map(|row| row.interest).sum::<Decimal>()
}
