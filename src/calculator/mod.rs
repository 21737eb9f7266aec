//! Loan calculation engine: EMI, amortization and prepayment
//!
//! All functions are pure. Invalid inputs produce zero results rather than errors,
//! so callers always have something to display.

mod emi;
mod engine;
mod prepayment;
mod schedule;
mod state;

pub use emi::{compute_monthly_payment, LoanSummary};
pub use engine::{simulate, AmortizationEngine, ScheduleConfig, CHART_MAX_PERIODS, CHART_STRIDE};
pub use prepayment::{simulate_prepayment, PrepaymentOutcome};
pub use schedule::{AmortizationResult, PaymentPeriod};
pub use state::AmortizationState;
