//! JSON-string interface to the simulator.
//!
//! The dashboard caller speaks flat JSON objects: the request carries the
//! loan terms in snake_case, the response is either the flat result object or
//! `{"error": "<message>"}`. Callers branch on the presence of the `error`
//! key.

use serde_json::json;

use crate::error::LoanAnalyticsError;
use crate::prepayment::{simulate_prepayment, LoanPrepaymentInput};

/// Run a simulation from a raw JSON request and render the wire response.
///
/// Never fails: malformed requests and rejected inputs both surface as the
/// `{"error"}` object. The response carries no timing metadata, so identical
/// requests produce byte-identical responses.
pub fn simulate_to_json(input_json: &str) -> String {
    match run(input_json) {
        Ok(body) => body,
        Err(message) => json!({ "error": message }).to_string(),
    }
}

fn run(input_json: &str) -> Result<String, String> {
    let input: LoanPrepaymentInput =
        serde_json::from_str(input_json).map_err(|e| LoanAnalyticsError::from(e).to_string())?;
    let output = simulate_prepayment(&input).map_err(|e| e.to_string())?;
    serde_json::to_string(&output.result).map_err(|e| LoanAnalyticsError::from(e).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const STANDARD_REQUEST: &str = r#"{
        "loan_principal": 100000,
        "annual_interest_rate": 12,
        "loan_tenure_months": 12,
        "monthly_emi": 8884.88,
        "outstanding_principal": 100000,
        "prepayment_amount": 20000,
        "prepayment_month": 6
    }"#;

    #[test]
    fn test_valid_request_returns_result_object() {
        let response = simulate_to_json(STANDARD_REQUEST);
        let value: Value = serde_json::from_str(&response).unwrap();

        assert!(value.get("error").is_none());
        assert_eq!(value["original_tenure_months"], 12);
        assert_eq!(value["new_tenure_months"], 10);
        assert_eq!(value["tenure_reduction_months"], 2);
        assert_eq!(value["interest_saved"], "1075.13");
        assert!(value["summary"].as_str().unwrap().contains("month 6"));
    }

    #[test]
    fn test_invalid_input_returns_error_object() {
        let request = STANDARD_REQUEST.replace("\"prepayment_month\": 6", "\"prepayment_month\": 13");
        let response = simulate_to_json(&request);
        let value: Value = serde_json::from_str(&response).unwrap();

        assert!(value.get("error").is_some());
        assert!(value["error"].as_str().unwrap().contains("prepayment_month"));
        assert!(value.get("interest_saved").is_none());
    }

    #[test]
    fn test_malformed_json_returns_error_object() {
        let response = simulate_to_json("{not json");
        let value: Value = serde_json::from_str(&response).unwrap();
        assert!(value.get("error").is_some());
    }

    #[test]
    fn test_identical_requests_byte_identical() {
        let first = simulate_to_json(STANDARD_REQUEST);
        let second = simulate_to_json(STANDARD_REQUEST);
        assert_eq!(first, second);
    }
}
