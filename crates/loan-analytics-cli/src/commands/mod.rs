pub mod prepayment;
