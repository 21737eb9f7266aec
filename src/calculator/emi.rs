//! Equated monthly installment (EMI) calculation

use serde::{Deserialize, Serialize};

use crate::loan::{monthly_rate, LoanTerms, MONTHS_PER_YEAR};

/// Calculate the fixed monthly payment that amortizes a loan.
///
/// EMI = P * R * (1 + R)^N / ((1 + R)^N - 1)
///
/// Where:
/// - P = principal
/// - R = monthly rate (annual_rate_percent / 1200)
/// - N = tenure_years * 12, kept real-valued so fractional years give a fractional exponent
///
/// A zero rate pays the principal off in equal parts (P / N).
/// Invalid inputs return 0.0.
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> f64 {
    let terms = LoanTerms::new(principal, annual_rate_percent, tenure_years);
    if !terms.is_valid() {
        log::warn!("invalid loan terms {:?}, substituting zero payment", terms);
        return 0.0;
    }

    let rate = monthly_rate(annual_rate_percent);
    let months = tenure_years * MONTHS_PER_YEAR;

    if rate == 0.0 {
        return principal / months;
    }

    let factor = (1.0 + rate).powf(months);
    principal * rate * factor / (factor - 1.0)
}

/// Payment and lifetime totals for one set of loan terms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Fixed monthly payment (EMI)
    pub monthly_payment: f64,

    /// EMI * tenure in months
    pub total_payment: f64,

    /// Total payment less principal
    pub total_interest: f64,
}

impl LoanSummary {
    /// Summarize a loan. Invalid terms give an all-zero summary.
    pub fn from_terms(terms: &LoanTerms) -> Self {
        if !terms.is_valid() {
            return Self::default();
        }

        let monthly_payment = compute_monthly_payment(
            terms.principal,
            terms.annual_rate_percent,
            terms.tenure_years,
        );
        let total_payment = monthly_payment * terms.total_months();
        let total_interest = total_payment - terms.principal;

        log::debug!(
            "EMI {:.2} over {} months, total interest {:.2}",
            monthly_payment,
            terms.total_months(),
            total_interest
        );

        Self {
            monthly_payment,
            total_payment,
            total_interest,
        }
    }

    /// Monthly rate shown alongside the summary, as a percentage
    pub fn monthly_rate_percent(terms: &LoanTerms) -> f64 {
        terms.annual_rate_percent / MONTHS_PER_YEAR
    }

    /// Total interest as a percentage of principal.
    /// A non-positive principal is treated as 1 to keep the ratio finite.
    pub fn interest_to_principal_percent(&self, terms: &LoanTerms) -> f64 {
        let base = if terms.principal > 0.0 { terms.principal } else { 1.0 };
        self.total_interest / base * 100.0
    }
}
