//! Scenario runner for batch projections
//!
//! Each scenario is validated and projected independently, in parallel, and
//! an invalid row is reported without stopping the rest of the batch.

use std::io::Write;

use csv::Writer;
use log::{info, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::inputs::Scenario;
use crate::projection::{project, PeriodUnit, ScheduleSummary};

/// Result of one scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub summary: Result<ScheduleSummary>,
}

/// Batch runner for many scenarios
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run all scenarios; outcomes keep input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                summary: scenario.inputs.parse().map(|params| project(&params).summary()),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.summary.is_err()).count();
        for outcome in &outcomes {
            if let Err(err) = &outcome.summary {
                warn!("scenario '{}' skipped: {}", outcome.name, err);
            }
        }
        info!("ran {} scenarios ({} failed)", outcomes.len(), failed);

        outcomes
    }

    /// Write one summary row per scenario; failures carry their error text
    pub fn write_summaries<W: Write>(&self, outcomes: &[ScenarioOutcome], writer: W) -> Result<()> {
        let mut csv = Writer::from_writer(writer);
        csv.write_record([
            "Name",
            "Periods",
            "Unit",
            "FinalBalance",
            "TotalContributions",
            "TotalInterest",
            "Error",
        ])?;

        for outcome in outcomes {
            match &outcome.summary {
                Ok(summary) => csv.write_record([
                    outcome.name.clone(),
                    summary.total_periods.to_string(),
                    unit_name(summary.period_unit).to_string(),
                    format!("{:.2}", summary.final_balance),
                    format!("{:.2}", summary.total_contributions),
                    format!("{:.2}", summary.total_interest),
                    String::new(),
                ])?,
                Err(err) => csv.write_record([
                    outcome.name.clone(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    err.to_string(),
                ])?,
            }
        }

        csv.flush()?;
        Ok(())
    }
}

fn unit_name(unit: PeriodUnit) -> &'static str {
    match unit {
        PeriodUnit::Month => "month",
        PeriodUnit::Year => "year",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::load_scenarios_from_reader;
    use approx::assert_abs_diff_eq;

    const SCENARIOS: &str = "\
Name,Principal,Years,RatePercent,RateType,CompoundMonthly,Contribution
low,1000,2,3,year,false,
mid,1000,2,4,year,false,
high,1000,2,5,year,false,
bad,1000,-2,5,year,false,
";

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();
        let scenarios = load_scenarios_from_reader(SCENARIOS.as_bytes()).unwrap();

        let outcomes = runner.run_batch(&scenarios);
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].name, "low");
        assert_eq!(outcomes[3].name, "bad");

        // Higher rate should result in higher final balance
        let low = outcomes[0].summary.as_ref().unwrap();
        let high = outcomes[2].summary.as_ref().unwrap();
        assert!(high.final_balance > low.final_balance);
        assert_abs_diff_eq!(high.final_balance, 1102.5, epsilon = 1e-9);

        assert!(outcomes[3].summary.as_ref().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_write_summaries() {
        let runner = ScenarioRunner::new();
        let scenarios = load_scenarios_from_reader(SCENARIOS.as_bytes()).unwrap();
        let outcomes = runner.run_batch(&scenarios);

        let mut buffer = Vec::new();
        runner.write_summaries(&outcomes, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "high,2,year,1102.50,0.00,102.50,");
        assert!(lines[4].starts_with("bad,,,,,,"));
        assert!(lines[4].contains("invalid input for period_count"));
    }
}
