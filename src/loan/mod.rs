//! Loan input data

mod terms;

pub use terms::{monthly_rate, LoanTerms, MONTHS_PER_YEAR};
