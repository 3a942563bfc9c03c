use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loan prepayment
// ---------------------------------------------------------------------------

/// The dashboard's wire contract: flat result object on success,
/// `{"error": "<message>"}` on any failure. Never throws.
#[napi]
pub fn simulate_loan_prepayment(input_json: String) -> String {
    loan_analytics_core::wire::simulate_to_json(&input_json)
}

/// Full computation envelope (result, warnings, methodology, metadata).
/// Malformed or invalid input throws.
#[napi]
pub fn simulate_loan_prepayment_detailed(input_json: String) -> NapiResult<String> {
    let input: loan_analytics_core::prepayment::LoanPrepaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_analytics_core::prepayment::simulate_prepayment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
