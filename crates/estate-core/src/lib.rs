pub mod error;
pub mod types;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "loan")]
pub mod loan;

pub use error::EstateError;
pub use types::*;

/// Standard result type for all estate-core operations
pub type EstateResult<T> = Result<T, EstateError>;
