//! Amortization schedule output structures

use serde::{Deserialize, Serialize};

/// One simulated month of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// Month number (1-indexed)
    pub period_index: u32,

    /// Interest charged on the opening balance
    pub interest_portion: f64,

    /// Payment less interest
    pub principal_portion: f64,

    /// Balance after the payment, never negative
    pub ending_balance: f64,
}

/// Complete amortization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Payment applied every period
    pub fixed_payment: f64,

    /// Emitted periods in chronological order (sampled when stride > 1)
    pub periods: Vec<PaymentPeriod>,

    /// Number of months simulated, including those skipped by sampling
    pub simulated_months: u32,

    /// Interest + principal over every simulated month
    pub total_payment: f64,

    /// Interest over every simulated month
    pub total_interest: f64,

    /// Principal repaid over every simulated month
    pub total_principal: f64,

    /// Balance after the last simulated month
    pub closing_balance: f64,
}

impl AmortizationResult {
    pub fn new(fixed_payment: f64) -> Self {
        Self {
            fixed_payment,
            periods: Vec::new(),
            simulated_months: 0,
            total_payment: 0.0,
            total_interest: 0.0,
            total_principal: 0.0,
            closing_balance: 0.0,
        }
    }

    /// Add an emitted period
    pub fn add_period(&mut self, period: PaymentPeriod) {
        self.periods.push(period);
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
