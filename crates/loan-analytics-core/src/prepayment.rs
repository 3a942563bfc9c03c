//! Loan prepayment impact simulator.
//!
//! Walks a fixed-EMI amortising loan month by month from the start of the
//! schedule, applies a one-time lump-sum prepayment at the chosen month, and
//! reports the interest saved and the tenure eliminated relative to the
//! original schedule. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanAnalyticsError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanAnalyticsResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Hard ceiling on the amortisation walk: 600 months (50 years). Schedules
/// whose EMI never covers the interest due report this value as their tenure.
pub const MAX_TENURE_MONTHS: u32 = 600;

/// Minimum balance threshold below which the loan is considered fully paid.
const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Prepayments below this fraction of the outstanding principal trigger the
/// minimal-impact caution.
const SMALL_PREPAYMENT_RATIO: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Loan prepayment simulation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPrepaymentInput {
    /// Original loan amount.
    pub loan_principal: Money,
    /// Nominal annual rate as a percentage (e.g., 12 for 12%), compounded
    /// monthly.
    pub annual_interest_rate: Decimal,
    /// Original contracted duration in months.
    pub loan_tenure_months: u32,
    /// Fixed equal monthly installment as contracted (not recomputed here).
    pub monthly_emi: Money,
    /// Principal remaining as of today. Feeds the small-prepayment caution
    /// only; the amortisation walk restarts from `loan_principal`.
    pub outstanding_principal: Money,
    /// Lump sum applied once, directly to principal.
    pub prepayment_amount: Money,
    /// 1-based month at which the lump sum is applied.
    pub prepayment_month: u32,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Loan prepayment simulation result. Field names are the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPrepaymentResult {
    /// Total interest under the original schedule, rounded to 2 decimals.
    pub interest_before_prepayment: Money,
    /// Total interest under the prepayment schedule, rounded to 2 decimals.
    pub interest_after_prepayment: Money,
    /// Difference of the two, rounded to 2 decimals.
    pub interest_saved: Money,
    /// The contracted tenure, echoed back.
    pub original_tenure_months: u32,
    /// Months until payoff with the prepayment applied.
    /// `MAX_TENURE_MONTHS` signals a schedule that never amortises.
    pub new_tenure_months: u32,
    /// Months eliminated, floored at zero.
    pub tenure_reduction_months: u32,
    /// Human-readable recap of the figures above.
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate the impact of a one-time prepayment on a fixed-EMI loan.
pub fn simulate_prepayment(
    input: &LoanPrepaymentInput,
) -> LoanAnalyticsResult<ComputationOutput<LoanPrepaymentResult>> {
    let start = Instant::now();
    let (result, warnings) = compute_prepayment_impact(input)?;
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Month-by-Month Amortisation with Lump-Sum Prepayment",
        input,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

fn compute_prepayment_impact(
    input: &LoanPrepaymentInput,
) -> LoanAnalyticsResult<(LoanPrepaymentResult, Vec<String>)> {
    validate(input)?;

    let mut warnings: Vec<String> = Vec::new();

    let monthly_rate: Rate = input.annual_interest_rate / dec!(12) / dec!(100);

    // Total interest under the original schedule: EMI * n - P. Trusts the
    // caller-supplied (principal, EMI, tenure) triple to be mutually
    // consistent; no amortisation check is performed on it.
    let interest_before =
        input.monthly_emi * Decimal::from(input.loan_tenure_months) - input.loan_principal;

    let schedule = run_schedule(input, monthly_rate);

    if !schedule.converged {
        warnings.push(format!(
            "EMI {} does not cover the monthly interest due; the schedule never amortises \
             and the tenure is capped at {} months",
            input.monthly_emi, MAX_TENURE_MONTHS
        ));
    }

    let interest_after = schedule.total_interest_paid.round_dp(2);
    let interest_saved = (interest_before - interest_after).round_dp(2);
    let tenure_reduction = input
        .loan_tenure_months
        .saturating_sub(schedule.months_elapsed);

    let mut summary = String::new();
    if input.prepayment_amount < input.outstanding_principal * SMALL_PREPAYMENT_RATIO {
        let caution = format!(
            "Prepayment amount ({}) is very small relative to outstanding principal ({}). \
             The impact may be minimal.",
            input.prepayment_amount, input.outstanding_principal
        );
        warnings.push(caution.clone());
        summary.push_str(&caution);
        summary.push(' ');
    }
    summary.push_str(&format!(
        "By prepaying {} in month {}, you will save {} in interest and reduce your loan \
         tenure by {} months (from {} months to {} months).",
        input.prepayment_amount,
        input.prepayment_month,
        interest_saved.round(),
        tenure_reduction,
        input.loan_tenure_months,
        schedule.months_elapsed,
    ));

    let result = LoanPrepaymentResult {
        interest_before_prepayment: interest_before.round_dp(2),
        interest_after_prepayment: interest_after,
        interest_saved,
        original_tenure_months: input.loan_tenure_months,
        new_tenure_months: schedule.months_elapsed,
        tenure_reduction_months: tenure_reduction,
        summary,
    };

    Ok((result, warnings))
}

/// Outcome of the month-by-month walk.
struct ScheduleOutcome {
    months_elapsed: u32,
    total_interest_paid: Decimal,
    converged: bool,
}

/// Walk the loan from month 1 of the original schedule, apply the lump sum at
/// `prepayment_month`, and keep amortising any residual balance with the same
/// EMI up to `MAX_TENURE_MONTHS` in total.
fn run_schedule(input: &LoanPrepaymentInput, monthly_rate: Rate) -> ScheduleOutcome {
    let mut remaining_principal = input.loan_principal;
    let mut total_interest_paid = Decimal::ZERO;
    let mut months_elapsed: u32 = 0;

    for month in 1..=input.loan_tenure_months {
        if remaining_principal <= BALANCE_EPSILON {
            break;
        }

        let interest_component = remaining_principal * monthly_rate;
        let mut principal_component = input.monthly_emi - interest_component;

        if principal_component <= Decimal::ZERO {
            // Negative amortisation: the balance can never be paid down.
            return ScheduleOutcome {
                months_elapsed: MAX_TENURE_MONTHS,
                total_interest_paid,
                converged: false,
            };
        }

        // Final-month correction: never draw the balance negative.
        if principal_component > remaining_principal {
            principal_component = remaining_principal;
        }

        total_interest_paid += interest_component;
        remaining_principal -= principal_component;
        months_elapsed += 1;

        if month == input.prepayment_month && remaining_principal > Decimal::ZERO {
            remaining_principal -= input.prepayment_amount.min(remaining_principal);
            if remaining_principal <= BALANCE_EPSILON {
                break;
            }
        }
    }

    // Residual phase: when the contracted months run out with balance still
    // outstanding, continue the same recurrence until payoff or the ceiling.
    while remaining_principal > BALANCE_EPSILON && months_elapsed < MAX_TENURE_MONTHS {
        let interest_component = remaining_principal * monthly_rate;
        let mut principal_component = input.monthly_emi - interest_component;

        if principal_component <= Decimal::ZERO {
            return ScheduleOutcome {
                months_elapsed: MAX_TENURE_MONTHS,
                total_interest_paid,
                converged: false,
            };
        }

        if principal_component > remaining_principal {
            principal_component = remaining_principal;
        }

        total_interest_paid += interest_component;
        remaining_principal -= principal_component;
        months_elapsed += 1;
    }

    ScheduleOutcome {
        months_elapsed,
        total_interest_paid,
        converged: true,
    }
}

fn validate(input: &LoanPrepaymentInput) -> LoanAnalyticsResult<()> {
    if input.loan_principal <= Decimal::ZERO {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "loan_principal".into(),
            reason: "Loan principal must be positive".into(),
        });
    }
    if input.annual_interest_rate < Decimal::ZERO {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "annual_interest_rate".into(),
            reason: "Annual interest rate cannot be negative".into(),
        });
    }
    if input.loan_tenure_months == 0 {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "loan_tenure_months".into(),
            reason: "Loan tenure must be greater than zero months".into(),
        });
    }
    if input.monthly_emi <= Decimal::ZERO {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "monthly_emi".into(),
            reason: "Monthly EMI must be positive".into(),
        });
    }
    if input.outstanding_principal <= Decimal::ZERO {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "outstanding_principal".into(),
            reason: "Outstanding principal must be positive".into(),
        });
    }
    if input.prepayment_amount <= Decimal::ZERO {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "prepayment_amount".into(),
            reason: "Prepayment amount must be positive".into(),
        });
    }
    if input.prepayment_month == 0 {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "prepayment_month".into(),
            reason: "Prepayment month must be greater than zero".into(),
        });
    }
    if input.prepayment_month > input.loan_tenure_months {
        return Err(LoanAnalyticsError::InvalidInput {
            field: "prepayment_month".into(),
            reason: "Prepayment month cannot fall outside the loan tenure".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
