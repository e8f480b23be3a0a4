//! Application state passed between the calculate, render and export steps

use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{ProjectionError, Result};
use crate::inputs::{ProjectionParams, RawInputs};
use crate::projection::{project, Schedule};
use crate::report::{self, ReportConfig};

/// Holds the most recent successful schedule for later rendering or export
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub report: ReportConfig,
    last_schedule: Option<Schedule>,
}

impl AppState {
    pub fn new(report: ReportConfig) -> Self {
        Self {
            report,
            last_schedule: None,
        }
    }

    /// Parse inputs and project. A failed calculation clears the previous
    /// schedule so a later export never shows stale numbers.
    pub fn calculate(&mut self, inputs: &RawInputs) -> Result<&Schedule> {
        match inputs.parse() {
            Ok(params) => Ok(&*self.last_schedule.insert(project(&params))),
            Err(err) => {
                warn!("rejected inputs: {}", err);
                self.last_schedule = None;
                Err(err)
            }
        }
    }

    /// Project already-validated parameters
    pub fn calculate_params(&mut self, params: &ProjectionParams) -> &Schedule {
        self.last_schedule.insert(project(params))
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.last_schedule.as_ref()
    }

    fn require_schedule(&self) -> Result<&Schedule> {
        self.last_schedule.as_ref().ok_or(ProjectionError::NoSchedule)
    }

    /// Summary block followed by the period table
    pub fn render(&self) -> Result<String> {
        let schedule = self.require_schedule()?;
        Ok(format!(
            "{}\n{}",
            report::render_summary(schedule, self.report.locale),
            report::render_table(schedule, self.report.locale)
        ))
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        report::write_csv(self.require_schedule()?, &self.report, writer)
    }

    /// Export under a timestamped filename in `dir`
    pub fn export_csv_file(&self, dir: &Path) -> Result<PathBuf> {
        report::write_csv_file(self.require_schedule()?, &self.report, dir)
    }
}
