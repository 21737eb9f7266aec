//! Balance state carried from one simulated month to the next

use super::schedule::PaymentPeriod;

/// State of a loan balance at a point in the simulation
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Last simulated period (0 before the first payment)
    pub period: u32,

    /// Outstanding balance after the last simulated period
    pub remaining_balance: f64,

    /// Decimal monthly rate
    pub monthly_rate: f64,

    /// Payment applied every period
    pub fixed_payment: f64,

    /// Interest accumulated over all simulated periods
    pub cumulative_interest: f64,

    /// Principal repaid over all simulated periods
    pub cumulative_principal: f64,
}

impl AmortizationState {
    pub fn new(opening_balance: f64, monthly_rate: f64, fixed_payment: f64) -> Self {
        Self {
            period: 0,
            remaining_balance: opening_balance,
            monthly_rate,
            fixed_payment,
            cumulative_interest: 0.0,
            cumulative_principal: 0.0,
        }
    }

    /// Simulate one month and return its interest/principal split.
    ///
    /// The balance is floored at zero. A period that opens with nothing owed
    /// pays nothing.
    pub fn advance_month(&mut self) -> PaymentPeriod {
        self.period += 1;

        if self.remaining_balance <= 0.0 {
            self.remaining_balance = 0.0;
            return PaymentPeriod {
                period_index: self.period,
                interest_portion: 0.0,
                principal_portion: 0.0,
                ending_balance: 0.0,
            };
        }

        let opening_balance = self.remaining_balance;
        let interest_portion = opening_balance * self.monthly_rate;
        let principal_portion = self.fixed_payment - interest_portion;
        self.remaining_balance = (opening_balance - principal_portion).max(0.0);

        // Only the balance actually retired counts, so an overpaying final month
        // does not push the totals past the principal
        self.cumulative_interest += interest_portion;
        self.cumulative_principal += opening_balance - self.remaining_balance;

        PaymentPeriod {
            period_index: self.period,
            interest_portion,
            principal_portion,
            ending_balance: self.remaining_balance,
        }
    }

    /// Advance `months` periods, discarding the per-period rows.
    ///
    /// Once the loan is paid off the remaining periods are all-zero, so they are
    /// skipped and only the period counter moves.
    pub fn advance_months(&mut self, months: u32) {
        for done in 0..months {
            if self.is_paid_off() {
                self.remaining_balance = 0.0;
                self.period = self.period.saturating_add(months - done);
                return;
            }
            self.advance_month();
        }
    }

    /// Whether the loan has been fully repaid
    pub fn is_paid_off(&self) -> bool {
        self.remaining_balance <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_step_split() {
        let mut state = AmortizationState::new(10_000.0, 0.01, 500.0);
        let period = state.advance_month();

        assert_eq!(period.period_index, 1);
        assert_relative_eq!(period.interest_portion, 100.0);
        assert_relative_eq!(period.principal_portion, 400.0);
        assert_relative_eq!(period.ending_balance, 9_600.0);
        assert_relative_eq!(state.cumulative_interest, 100.0);
    }

    #[test]
    fn test_balance_floors_at_zero_then_stays_flat() {
        let mut state = AmortizationState::new(300.0, 0.0, 500.0);

        let last = state.advance_month();
        assert_eq!(last.ending_balance, 0.0);
        assert_relative_eq!(last.principal_portion, 500.0);
        assert!(state.is_paid_off());

        let tail = state.advance_month();
        assert_eq!(tail.period_index, 2);
        assert_eq!(tail.interest_portion, 0.0);
        assert_eq!(tail.principal_portion, 0.0);
        assert_eq!(tail.ending_balance, 0.0);
    }

    #[test]
    fn test_advance_months_tracks_period() {
        let mut state = AmortizationState::new(1_000.0, 0.0, 100.0);
        state.advance_months(4);
        assert_eq!(state.period, 4);
        assert_relative_eq!(state.remaining_balance, 600.0);
        assert_relative_eq!(state.cumulative_principal, 400.0);
    }

    #[test]
    fn test_overpaying_month_counts_retired_balance() {
        let mut state = AmortizationState::new(300.0, 0.0, 500.0);
        state.advance_month();

        assert_relative_eq!(state.cumulative_principal, 300.0);
        assert_eq!(state.cumulative_interest, 0.0);
    }

    #[test]
    fn test_advance_months_skips_paid_off_tail() {
        let mut state = AmortizationState::new(1_000.0, 0.01, 600.0);
        state.advance_months(u32::MAX);

        assert_eq!(state.period, u32::MAX);
        assert_eq!(state.remaining_balance, 0.0);
        assert_relative_eq!(state.cumulative_principal, 1_000.0, epsilon = 1e-9);
        assert_relative_eq!(state.cumulative_interest, 14.1, epsilon = 1e-9);
    }
}
