//! Core projection engine for period-by-period balance growth
//!
//! Contribution timing: each period's contribution is deposited first and
//! interest is then credited on the new balance, so a contribution earns
//! interest in the period it is added. Monthly schedules deposit nothing in
//! period 1 (the initial deposit period); yearly schedules deposit twelve
//! monthly contributions in every period, including the first.

use log::debug;

use crate::error::Result;
use crate::inputs::{Compounding, ProjectionParams, RawInputs};
use super::rounding;
use super::schedule::{PeriodRecord, Schedule};
use super::state::ProjectionState;

/// Main projection engine
pub struct ProjectionEngine {
    params: ProjectionParams,
    per_period_rate: f64,
}

impl ProjectionEngine {
    /// Create a new projection engine for validated parameters
    pub fn new(params: ProjectionParams) -> Self {
        let per_period_rate = params.per_period_rate();
        Self { params, per_period_rate }
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Run the projection
    pub fn project(&self) -> Schedule {
        let iterations = self.params.total_iterations();
        debug!(
            "projecting {} {:?} periods at per-period rate {}",
            iterations,
            self.params.period_unit(),
            self.per_period_rate
        );

        let mut state = ProjectionState::from_params(&self.params);
        let mut periods = Vec::with_capacity(iterations as usize);

        for _period in 1..=iterations {
            state.advance_period();
            periods.push(self.calculate_period(&mut state));
        }

        let principal = self.params.principal();
        let final_balance = periods.last().map(|p| p.closing_balance).unwrap_or(principal);
        let total_contributions = self.params.total_contributions();
        let total_interest = rounding::internal(final_balance - principal - total_contributions);

        Schedule {
            periods,
            final_balance,
            total_contributions,
            total_interest,
            period_unit: self.params.period_unit(),
        }
    }

    /// Apply one period's contribution and interest
    fn calculate_period(&self, state: &mut ProjectionState) -> PeriodRecord {
        let contribution = self.contribution_for(state.period_index);

        state.deposit(contribution);
        state.credit_interest(self.per_period_rate);

        let interest = rounding::internal(state.balance - state.opening_balance - contribution);

        PeriodRecord {
            index: state.period_index,
            opening_balance: state.opening_balance,
            contribution,
            interest,
            closing_balance: state.balance,
        }
    }

    /// Amount deposited in the given 1-based period
    fn contribution_for(&self, period_index: u32) -> f64 {
        let monthly = self.params.periodic_contribution();
        match self.params.compounding() {
            Compounding::Monthly if period_index == 1 => 0.0,
            Compounding::Monthly => monthly,
            Compounding::Yearly => monthly * 12.0,
        }
    }
}

/// Project a schedule for validated parameters
pub fn project(params: &ProjectionParams) -> Schedule {
    ProjectionEngine::new(params.clone()).project()
}

/// Validate raw inputs and project; fails before any period is computed
pub fn project_raw(inputs: &RawInputs) -> Result<Schedule> {
    let params = inputs.parse()?;
    Ok(project(&params))
}
