//! Load scenarios from CSV files and single runs from JSON requests

use super::{ProjectionParams, ProjectionRequest, RawInputs};
use crate::error::{ProjectionError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching scenario file columns
///
/// Numeric columns are read as text so a bad value rejects only its own
/// scenario instead of failing the whole file.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: String,
    #[serde(rename = "Years")]
    years: String,
    #[serde(rename = "RatePercent")]
    rate_percent: String,
    /// "month" or "year"
    #[serde(rename = "RateType")]
    rate_type: String,
    #[serde(rename = "CompoundMonthly")]
    compound_monthly: bool,
    #[serde(rename = "Contribution", default)]
    contribution: String,
}

impl CsvRow {
    fn to_scenario(self) -> Scenario {
        Scenario {
            name: self.name,
            inputs: RawInputs {
                principal: self.principal,
                period_count: self.years,
                rate_percent: self.rate_percent,
                rate_is_monthly: self.rate_type.trim().eq_ignore_ascii_case("month"),
                compound_monthly: self.compound_monthly,
                periodic_contribution: self.contribution,
            },
        }
    }
}

/// Named set of unparsed inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub inputs: RawInputs,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario());
    }

    Ok(scenarios)
}

/// Load a single validated run from a JSON request file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ProjectionParams> {
    let text = std::fs::read_to_string(path)?;
    parse_request(&text)
}

/// Parse and validate a JSON request document
///
/// Malformed, missing or non-numeric fields are invalid input; only I/O
/// failures keep their JSON error.
pub fn parse_request(json: &str) -> Result<ProjectionParams> {
    let request: ProjectionRequest = serde_json::from_str(json).map_err(|err| {
        if err.is_io() {
            ProjectionError::Json(err)
        } else {
            ProjectionError::invalid("request", err.to_string())
        }
    })?;
    ProjectionParams::try_from(request)
}
