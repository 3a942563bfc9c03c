use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_analytics_core::prepayment::{self, LoanPrepaymentInput};

use crate::input;

/// Arguments for the prepayment simulation
#[derive(Args)]
pub struct PrepaymentArgs {
    /// Path to JSON/YAML file with the loan terms
    #[arg(long)]
    pub input: Option<String>,

    /// Original loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 12 for 12%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Contracted tenure in months
    #[arg(long)]
    pub tenure_months: Option<u32>,

    /// Fixed monthly EMI
    #[arg(long)]
    pub emi: Option<Decimal>,

    /// Principal outstanding today
    #[arg(long)]
    pub outstanding: Option<Decimal>,

    /// One-time prepayment amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// 1-based month the prepayment is applied
    #[arg(long)]
    pub month: Option<u32>,
}

pub fn run_prepayment(args: PrepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input = resolve_input(&args)?;
    let result = prepayment::simulate_prepayment(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}

fn resolve_input(
    args: &PrepaymentArgs,
) -> Result<LoanPrepaymentInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_input(path);
    }

    if let (
        Some(principal),
        Some(rate),
        Some(tenure_months),
        Some(emi),
        Some(outstanding),
        Some(amount),
        Some(month),
    ) = (
        args.principal,
        args.rate,
        args.tenure_months,
        args.emi,
        args.outstanding,
        args.amount,
        args.month,
    ) {
        return Ok(LoanPrepaymentInput {
            loan_principal: principal,
            annual_interest_rate: rate,
            loan_tenure_months: tenure_months,
            monthly_emi: emi,
            outstanding_principal: outstanding,
            prepayment_amount: amount,
            prepayment_month: month,
        });
    }

    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    Err("--input <file.json>, the full set of loan-term flags, or stdin required \
         for prepayment simulation"
        .into())
}
