//! Month-by-month amortization engine

use serde::{Deserialize, Serialize};

use crate::loan::LoanTerms;
use super::schedule::AmortizationResult;
use super::state::AmortizationState;

/// Stride used for chart sampling
pub const CHART_STRIDE: u32 = 3;

/// Months covered by chart sampling
pub const CHART_MAX_PERIODS: u32 = 60;

/// Configuration for a schedule run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Emit every `stride`-th month, starting with month 1. Zero behaves as 1.
    pub stride: u32,

    /// Stop after this many months even if the tenure is longer
    pub max_periods: Option<u32>,
}

impl ScheduleConfig {
    /// Every month for the whole tenure (tables and export)
    pub fn full() -> Self {
        Self::default()
    }

    /// Every 3rd month of the first 5 years (charts)
    pub fn chart() -> Self {
        Self {
            stride: CHART_STRIDE,
            max_periods: Some(CHART_MAX_PERIODS),
        }
    }

    fn effective_stride(&self) -> u32 {
        self.stride.max(1)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            stride: 1,
            max_periods: None,
        }
    }
}

/// Amortization engine
pub struct AmortizationEngine {
    config: ScheduleConfig,
}

impl AmortizationEngine {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Run the schedule for one loan at a fixed monthly payment.
    ///
    /// Invalid terms give an empty schedule with zero totals.
    pub fn simulate(&self, terms: &LoanTerms, fixed_payment: f64) -> AmortizationResult {
        let mut result = AmortizationResult::new(fixed_payment);
        if !terms.is_valid() {
            log::warn!("invalid loan terms {:?}, substituting empty schedule", terms);
            return result;
        }

        let horizon = match self.config.max_periods {
            Some(cap) => terms.whole_months().min(cap),
            None => terms.whole_months(),
        };
        let stride = self.config.effective_stride();

        let mut state = AmortizationState::new(terms.principal, terms.monthly_rate(), fixed_payment);

        for month in 1..=horizon {
            let period = state.advance_month();
            if (month - 1) % stride == 0 {
                result.add_period(period);
            }
        }

        result.simulated_months = state.period;
        result.total_interest = state.cumulative_interest;
        result.total_principal = state.cumulative_principal;
        result.total_payment = state.cumulative_interest + state.cumulative_principal;
        result.closing_balance = state.remaining_balance;

        log::debug!(
            "simulated {} months (stride {}), emitted {} periods, closing balance {:.6}",
            result.simulated_months,
            stride,
            result.len(),
            result.closing_balance
        );

        result
    }
}

/// Simulate an amortization schedule with the given sampling config
pub fn simulate(terms: &LoanTerms, fixed_payment: f64, config: ScheduleConfig) -> AmortizationResult {
    AmortizationEngine::new(config).simulate(terms, fixed_payment)
}
