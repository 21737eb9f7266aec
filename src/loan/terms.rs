//! Loan terms as entered on the input form

use serde::{Deserialize, Serialize};

use crate::error::{LoanError, Result};

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Principal, annual rate and tenure of a single loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage (10.0 for 10%)
    pub annual_rate_percent: f64,

    /// Loan duration in years (fractional years allowed)
    pub tenure_years: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    /// Parse terms from the decimal strings a form collects
    pub fn parse(principal: &str, annual_rate_percent: &str, tenure_years: &str) -> Result<Self> {
        Ok(Self {
            principal: parse_field("principal", principal)?,
            annual_rate_percent: parse_field("annual_rate_percent", annual_rate_percent)?,
            tenure_years: parse_field("tenure_years", tenure_years)?,
        })
    }

    /// Whether these terms describe a loan the engine can amortize.
    ///
    /// Invalid terms are not an error: every calculation substitutes a zero result.
    pub fn is_valid(&self) -> bool {
        self.principal.is_finite()
            && self.annual_rate_percent.is_finite()
            && self.tenure_years.is_finite()
            && self.principal > 0.0
            && self.annual_rate_percent >= 0.0
            && self.tenure_years > 0.0
    }

    /// Per-period decimal rate: annual percent / (12 * 100)
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }

    /// Tenure in months, kept real-valued for the payment formula
    pub fn total_months(&self) -> f64 {
        self.tenure_years * MONTHS_PER_YEAR
    }

    /// Tenure in whole months, truncated toward zero.
    /// Used wherever the month count bounds an iteration.
    pub fn whole_months(&self) -> u32 {
        let months = self.total_months();
        if months.is_finite() && months > 0.0 {
            // `as` saturates at u32::MAX and truncates toward zero
            months.trunc() as u32
        } else {
            0
        }
    }
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self::new(500_000.0, 10.0, 20.0)
    }
}

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / (MONTHS_PER_YEAR * 100.0)
}

fn parse_field(field: &'static str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LoanError::MissingField(field));
    }
    trimmed.parse::<f64>().map_err(|_| LoanError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
