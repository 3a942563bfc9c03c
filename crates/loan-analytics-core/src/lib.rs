pub mod error;
pub mod prepayment;
pub mod types;
pub mod wire;

pub use error::LoanAnalyticsError;
pub use types::*;

/// Standard result type for all loan-analytics operations
pub type LoanAnalyticsResult<T> = Result<T, LoanAnalyticsError>;
