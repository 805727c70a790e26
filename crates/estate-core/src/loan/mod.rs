pub mod analysis;
pub mod emi;
pub mod schedule;

pub use analysis::{analyze_loan, LoanInput, LoanOutput};
pub use emi::{monthly_installment, LoanParameters};
pub use schedule::{amortization_schedule, total_interest, AmortizationRow};
