//! EMI Calculator - loan installment, amortization and prepayment engine
//!
//! This library provides:
//! - Fixed monthly payment (EMI) calculation
//! - Month-by-month amortization schedules, full or sampled for charts
//! - Prepayment impact on tenure and interest with the EMI held fixed
//! - Ranking of competing loan offers
//! - Schedule export to CSV

pub mod error;
pub mod loan;
pub mod calculator;
pub mod comparison;
pub mod request;
pub mod report;

// Re-export commonly used types
pub use error::{LoanError, Result};
pub use loan::LoanTerms;
pub use calculator::{
    compute_monthly_payment, simulate, simulate_prepayment, AmortizationResult, LoanSummary,
    PaymentPeriod, PrepaymentOutcome, ScheduleConfig,
};
pub use comparison::{LoanComparison, LoanOption};
pub use request::LoanRequest;
