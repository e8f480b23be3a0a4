//! Running balance carried from one period to the next

use crate::inputs::ProjectionParams;
use super::rounding;

/// State of the account at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current period (1-indexed, 0 before the first advance)
    pub period_index: u32,

    /// Balance before this period's contribution and interest
    pub opening_balance: f64,

    /// Running balance, rounded to internal precision after every step
    pub balance: f64,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn from_params(params: &ProjectionParams) -> Self {
        Self {
            period_index: 0,
            opening_balance: params.principal(),
            balance: params.principal(),
        }
    }

    /// Advance to next period; the opening balance is the prior closing balance
    pub fn advance_period(&mut self) {
        self.period_index += 1;
        self.opening_balance = self.balance;
    }

    /// Add a deposit to the running balance
    pub fn deposit(&mut self, amount: f64) {
        self.balance = rounding::internal(self.balance + amount);
    }

    /// Credit interest at `rate` on the running balance
    pub fn credit_interest(&mut self, rate: f64) {
        self.balance = rounding::internal(self.balance * (1.0 + rate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Compounding, RateBasis};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_advance_carries_balance() {
        let params = ProjectionParams::without_contribution(100.0, 1, 12.0, RateBasis::Annual, Compounding::Monthly).unwrap();
        let mut state = ProjectionState::from_params(&params);

        state.advance_period();
        state.deposit(10.0);
        state.credit_interest(0.1);
        assert_eq!(state.period_index, 1);
        assert_abs_diff_eq!(state.opening_balance, 100.0);
        assert_abs_diff_eq!(state.balance, 121.0, epsilon = 1e-9);

        state.advance_period();
        assert_abs_diff_eq!(state.opening_balance, 121.0, epsilon = 1e-9);
    }
}
