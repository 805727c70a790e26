//! Equated Monthly Installment: standard reducing-balance amortization.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EstateError;
use crate::types::{Money, Rate};
use crate::EstateResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Home-loan parameters as a buyer would enter them: full property price,
/// down payment as a percentage, annual rate as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Full property price, rupees
    pub principal_total: Money,
    /// Percentage of the price paid upfront, in [0, 100]
    pub down_payment_percent: Rate,
    /// Loan tenure in years; fractional values are valid (12.5 years is
    /// 150 monthly installments)
    pub tenure_years: Decimal,
    /// Annual interest rate as a percentage (8.5 = 8.5% p.a.)
    pub annual_rate_percent: Rate,
}

impl LoanParameters {
    /// The portion of the price actually financed.
    pub fn financed_principal(&self) -> Money {
        self.principal_total * (Decimal::ONE - self.down_payment_percent / dec!(100))
    }

    /// Monthly rate in decimal form.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / dec!(100) / MONTHS_PER_YEAR
    }

    /// Number of whole monthly installments. Non-positive tenures yield 0,
    /// which the installment guard maps to a zero EMI.
    pub fn months(&self) -> u32 {
        (self.tenure_years * MONTHS_PER_YEAR)
            .floor()
            .to_u32()
            .unwrap_or(0)
    }
}

/// Compute the fixed monthly installment, unrounded.
///
/// `EMI = P * r * (1+r)^n / ((1+r)^n - 1)` with monthly rate `r` and
/// `n` monthly installments. A zero rate degenerates to `P / n`.
///
/// Degenerate tenures or non-positive financed principal yield `Ok(0)`:
/// the consuming context is a display calculator where a zero reads better
/// than a fault. Percentages outside their domain are contract violations
/// and return an error.
pub fn monthly_installment(params: &LoanParameters) -> EstateResult<Money> {
    if params.down_payment_percent < Decimal::ZERO || params.down_payment_percent > dec!(100) {
        return Err(EstateError::InvalidInput {
            field: "down_payment_percent".into(),
            reason: "Down payment must be between 0 and 100 percent".into(),
        });
    }
    if params.annual_rate_percent < Decimal::ZERO {
        return Err(EstateError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }

    let financed = params.financed_principal();
    let n = params.months();

    if n == 0 || financed <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let r = params.monthly_rate();
    if r.is_zero() {
        return Ok(financed / Decimal::from(n));
    }

    let growth = (Decimal::ONE + r).powi(n as i64);
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(EstateError::DivisionByZero {
            context: "EMI annuity factor".into(),
        });
    }

    Ok(financed * r * growth / denominator)
}
