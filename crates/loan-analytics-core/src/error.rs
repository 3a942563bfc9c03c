use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanAnalyticsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanAnalyticsError {
    fn from(e: serde_json::Error) -> Self {
        LoanAnalyticsError::SerializationError(e.to_string())
    }
}
