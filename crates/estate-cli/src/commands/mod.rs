pub mod loan;
pub mod search;
