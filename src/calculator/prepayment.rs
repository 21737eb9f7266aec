//! Prepayment impact: a lump sum paid at a given month, with the EMI held fixed

use serde::{Deserialize, Serialize};

use crate::loan::LoanTerms;
use super::state::AmortizationState;

/// Result of a prepayment simulation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrepaymentOutcome {
    /// Months until the loan is repaid, counted from the first payment
    pub revised_tenure_months: u32,

    /// Interest avoided relative to the original schedule
    pub interest_saved: f64,

    /// Original tenure less revised tenure
    pub months_saved: f64,

    /// Payment after the prepayment (0 when the loan is retired)
    pub unchanged_monthly_payment: f64,
}

/// Simulate a lump-sum prepayment made in `prepayment_month` (1-indexed).
///
/// The balance after month `prepayment_month - 1` is reduced by the prepayment,
/// and the same `fixed_payment` keeps running, so the tenure shortens.
/// Non-positive prepayments, month 0, invalid terms and a non-positive payment
/// all give a zeroed outcome.
pub fn simulate_prepayment(
    terms: &LoanTerms,
    fixed_payment: f64,
    prepayment_amount: f64,
    prepayment_month: u32,
) -> PrepaymentOutcome {
    if !(prepayment_amount > 0.0) || prepayment_month == 0 {
        return PrepaymentOutcome::default();
    }
    if !terms.is_valid() || !(fixed_payment > 0.0) || !fixed_payment.is_finite() {
        log::warn!(
            "cannot simulate prepayment for {:?} at payment {}, substituting zero outcome",
            terms,
            fixed_payment
        );
        return PrepaymentOutcome::default();
    }

    let rate = terms.monthly_rate();
    let original_total_months = terms.total_months();

    // Payments made before the prepayment month
    let mut before = AmortizationState::new(terms.principal, rate, fixed_payment);
    before.advance_months(prepayment_month - 1);
    let interest_before_prepayment = before.cumulative_interest;

    let new_principal = (before.remaining_balance - prepayment_amount).max(0.0);

    if new_principal <= 0.0 {
        log::debug!("prepayment retires the loan in month {}", prepayment_month);
        return PrepaymentOutcome {
            revised_tenure_months: prepayment_month,
            interest_saved: 0.0,
            months_saved: (original_total_months - prepayment_month as f64).max(0.0),
            unchanged_monthly_payment: 0.0,
        };
    }

    let remaining_months = months_to_repay(new_principal, rate, fixed_payment);

    let revised_tenure_months = prepayment_month.saturating_add(remaining_months);
    let months_saved = (original_total_months - revised_tenure_months as f64).max(0.0);

    let original_total_interest = fixed_payment * original_total_months - terms.principal;

    let mut after = AmortizationState::new(new_principal, rate, fixed_payment);
    after.advance_months(remaining_months);
    let new_total_interest = interest_before_prepayment + after.cumulative_interest;

    let interest_saved = (original_total_interest - new_total_interest).max(0.0);

    log::debug!(
        "prepayment of {:.2} in month {}: {} months remain, {:.2} interest saved",
        prepayment_amount,
        prepayment_month,
        remaining_months,
        interest_saved
    );

    PrepaymentOutcome {
        revised_tenure_months,
        interest_saved,
        months_saved,
        unchanged_monthly_payment: fixed_payment,
    }
}

/// Whole number of payments left on `balance` with the payment held fixed.
///
/// M = ceil(ln(1 + balance * R / payment) / ln(1 + R)), or
/// ceil(balance / payment) when the rate is zero.
fn months_to_repay(balance: f64, rate: f64, payment: f64) -> u32 {
    let exact = if rate == 0.0 {
        balance / payment
    } else {
        (balance * rate / payment).ln_1p() / rate.ln_1p()
    };

    // `as` saturates, so an unbounded count cannot wrap
    exact.ceil().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::emi::{compute_monthly_payment, LoanSummary};
    use approx::assert_abs_diff_eq;

    fn reference_terms() -> LoanTerms {
        LoanTerms::new(500_000.0, 10.0, 20.0)
    }

    fn emi(terms: &LoanTerms) -> f64 {
        compute_monthly_payment(terms.principal, terms.annual_rate_percent, terms.tenure_years)
    }

    #[test]
    fn test_prepayment_shortens_tenure_and_saves_interest() {
        let terms = reference_terms();
        let payment = emi(&terms);
        let outcome = simulate_prepayment(&terms, payment, 100_000.0, 12);

        let baseline_interest = LoanSummary::from_terms(&terms).total_interest;

        assert!(outcome.revised_tenure_months < 240);
        assert!(outcome.interest_saved > 0.0);
        assert!(outcome.interest_saved < baseline_interest);
        assert_eq!(outcome.revised_tenure_months, 75);
        assert_abs_diff_eq!(outcome.months_saved, 165.0);
        assert_abs_diff_eq!(outcome.interest_saved, 436_650.60, epsilon = 0.01);
        assert_eq!(outcome.unchanged_monthly_payment, payment);
    }

    #[test]
    fn test_remaining_months_closed_form() {
        let terms = reference_terms();
        let rate = terms.monthly_rate();
        let payment = emi(&terms);

        // 392,447.69 left after 11 payments and a 100,000 lump sum
        let balance = 392_447.685_273_637_3;
        let exact = (balance * rate / payment).ln_1p() / rate.ln_1p();
        assert_eq!(months_to_repay(balance, rate, payment), exact.ceil() as u32);
        assert_eq!(months_to_repay(balance, rate, payment), 63);

        assert_eq!(months_to_repay(90_000.0, 0.0, 1_000.0), 90);
        assert_eq!(months_to_repay(90_500.0, 0.0, 1_000.0), 91);
    }

    #[test]
    fn test_full_payoff() {
        let terms = reference_terms();
        let payment = emi(&terms);
        let outcome = simulate_prepayment(&terms, payment, 1_000_000.0, 24);

        assert_eq!(outcome.revised_tenure_months, 24);
        assert_eq!(outcome.unchanged_monthly_payment, 0.0);
        assert_eq!(outcome.interest_saved, 0.0);
        assert_abs_diff_eq!(outcome.months_saved, 216.0);
    }

    #[test]
    fn test_first_month_prepayment_uses_principal() {
        let terms = reference_terms();
        let payment = emi(&terms);

        let exact = simulate_prepayment(&terms, payment, 500_000.0, 1);
        assert_eq!(exact.revised_tenure_months, 1);
        assert_eq!(exact.unchanged_monthly_payment, 0.0);

        let partial = simulate_prepayment(&terms, payment, 50_000.0, 1);
        assert!(partial.revised_tenure_months > 1);
        assert!(partial.revised_tenure_months < 240);
    }

    #[test]
    fn test_zero_rate_prepayment() {
        let terms = LoanTerms::new(120_000.0, 0.0, 10.0);
        let payment = emi(&terms);
        let outcome = simulate_prepayment(&terms, payment, 30_000.0, 1);

        // 90,000 left at 1,000 a month
        assert_eq!(outcome.revised_tenure_months, 91);
        assert_abs_diff_eq!(outcome.months_saved, 29.0);
        assert_eq!(outcome.interest_saved, 0.0);
        assert_eq!(outcome.unchanged_monthly_payment, 1000.0);
    }

    #[test]
    fn test_degenerate_inputs_give_zero_outcome() {
        let terms = reference_terms();
        let payment = emi(&terms);

        assert_eq!(simulate_prepayment(&terms, payment, 0.0, 12), PrepaymentOutcome::default());
        assert_eq!(simulate_prepayment(&terms, payment, -5.0, 12), PrepaymentOutcome::default());
        assert_eq!(simulate_prepayment(&terms, payment, 100_000.0, 0), PrepaymentOutcome::default());
        assert_eq!(simulate_prepayment(&terms, 0.0, 100_000.0, 12), PrepaymentOutcome::default());
        assert_eq!(
            simulate_prepayment(&LoanTerms::new(0.0, 10.0, 20.0), payment, 100_000.0, 12),
            PrepaymentOutcome::default()
        );
    }

    #[test]
    fn test_small_payment_still_has_finite_tenure() {
        let terms = reference_terms();
        // The payment is below the monthly interest, yet the closed form stays finite
        let outcome = simulate_prepayment(&terms, 1_000.0, 100_000.0, 1);

        assert_eq!(outcome.revised_tenure_months, 178);
        assert_abs_diff_eq!(outcome.months_saved, 62.0);
        assert_eq!(outcome.interest_saved, 0.0);
        assert_eq!(outcome.unchanged_monthly_payment, 1_000.0);
    }

    #[test]
    fn test_prepayment_month_far_beyond_tenure() {
        let terms = reference_terms();
        let payment = emi(&terms);
        let outcome = simulate_prepayment(&terms, payment, 1.0, u32::MAX);

        assert_eq!(outcome.revised_tenure_months, u32::MAX);
        assert_eq!(outcome.months_saved, 0.0);
        assert_eq!(outcome.unchanged_monthly_payment, 0.0);
    }

    #[test]
    fn test_outcomes_are_non_negative() {
        let terms = LoanTerms::new(300_000.0, 9.0, 7.5);
        let payment = emi(&terms);
        for &amount in &[1.0, 5_000.0, 150_000.0, 299_999.0] {
            for &month in &[1, 2, 30, 89, 90, 120] {
                let outcome = simulate_prepayment(&terms, payment, amount, month);
                assert!(outcome.interest_saved >= 0.0);
                assert!(outcome.months_saved >= 0.0);
            }
        }
    }
}
