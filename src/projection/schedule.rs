//! Period records and the schedule produced by a projection

use serde::{Deserialize, Serialize};

use super::rounding;

/// Length of one compounding period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Month,
    Year,
}

/// A single row of projection output for one period
///
/// Amounts are held at internal precision; use the `display_*` accessors for
/// values rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based position in the schedule
    pub index: u32,
    pub opening_balance: f64,
    pub contribution: f64,
    pub interest: f64,
    pub closing_balance: f64,
}

impl PeriodRecord {
    pub fn display_opening_balance(&self) -> f64 {
        rounding::display(self.opening_balance)
    }

    pub fn display_contribution(&self) -> f64 {
        rounding::display(self.contribution)
    }

    pub fn display_interest(&self) -> f64 {
        rounding::display(self.interest)
    }

    pub fn display_closing_balance(&self) -> f64 {
        rounding::display(self.closing_balance)
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Chronological period rows; empty when no periods were projected
    pub periods: Vec<PeriodRecord>,

    /// Closing balance of the last period, or the principal
    pub final_balance: f64,

    /// Contributions at the annualized rate over the whole term
    pub total_contributions: f64,

    /// `final_balance - principal - total_contributions`
    pub total_interest: f64,

    pub period_unit: PeriodUnit,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn display_final_balance(&self) -> f64 {
        rounding::display(self.final_balance)
    }

    pub fn display_total_interest(&self) -> f64 {
        rounding::display(self.total_interest)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let credited_interest: f64 = self.periods.iter().map(|p| p.interest).sum();
        let applied_contributions: f64 = self.periods.iter().map(|p| p.contribution).sum();

        ScheduleSummary {
            total_periods: self.periods.len() as u32,
            period_unit: self.period_unit,
            final_balance: rounding::display(self.final_balance),
            total_contributions: rounding::display(self.total_contributions),
            total_interest: rounding::display(self.total_interest),
            applied_contributions: rounding::display(applied_contributions),
            credited_interest: rounding::display(credited_interest),
        }
    }
}

/// Summary statistics for a schedule, at display precision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_periods: u32,
    pub period_unit: PeriodUnit,
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    /// Sum of contributions actually deposited period by period
    pub applied_contributions: f64,
    /// Sum of per-period interest credits
    pub credited_interest: f64,
}
