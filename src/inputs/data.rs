//! Validated projection parameters and the raw form-style inputs they are parsed from

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::projection::PeriodUnit;

/// How the quoted rate is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateBasis {
    /// Rate is already a per-month rate
    Monthly,
    /// Rate is a nominal annual rate
    Annual,
}

impl RateBasis {
    pub fn from_monthly_flag(rate_is_monthly: bool) -> Self {
        if rate_is_monthly {
            RateBasis::Monthly
        } else {
            RateBasis::Annual
        }
    }
}

/// How often interest is credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    Monthly,
    Yearly,
}

impl Compounding {
    pub fn from_monthly_flag(compound_monthly: bool) -> Self {
        if compound_monthly {
            Compounding::Monthly
        } else {
            Compounding::Yearly
        }
    }

    pub fn period_unit(self) -> PeriodUnit {
        match self {
            Compounding::Monthly => PeriodUnit::Month,
            Compounding::Yearly => PeriodUnit::Year,
        }
    }
}

/// Upper bound on projected periods (months or years) for one run
pub const MAX_ITERATIONS: u32 = 12_000;

/// Validated, immutable inputs for one projection run
///
/// Construction fails with `ProjectionError::InvalidInput` for negative or
/// non-finite amounts, so every value held here is safe to project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionParams {
    principal: f64,
    /// Number of years to project
    period_count: u32,
    rate_percent: f64,
    rate_basis: RateBasis,
    compounding: Compounding,
    /// Amount added once per month; yearly compounding adds twelve of these per period
    periodic_contribution: f64,
}

impl ProjectionParams {
    pub fn new(
        principal: f64,
        period_count: u32,
        rate_percent: f64,
        rate_basis: RateBasis,
        compounding: Compounding,
        periodic_contribution: f64,
    ) -> Result<Self> {
        check_amount("principal", principal)?;
        check_amount("rate_percent", rate_percent)?;
        check_amount("periodic_contribution", periodic_contribution)?;

        let iterations = match compounding {
            Compounding::Monthly => period_count.checked_mul(12),
            Compounding::Yearly => Some(period_count),
        };
        if !iterations.is_some_and(|n| n <= MAX_ITERATIONS) {
            return Err(ProjectionError::invalid(
                "period_count",
                format!("{} years exceeds the limit of {} periods", period_count, MAX_ITERATIONS),
            ));
        }

        Ok(Self {
            principal,
            period_count,
            rate_percent,
            rate_basis,
            compounding,
            periodic_contribution,
        })
    }

    /// Shorthand for runs without contributions
    pub fn without_contribution(
        principal: f64,
        period_count: u32,
        rate_percent: f64,
        rate_basis: RateBasis,
        compounding: Compounding,
    ) -> Result<Self> {
        Self::new(principal, period_count, rate_percent, rate_basis, compounding, 0.0)
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn period_count(&self) -> u32 {
        self.period_count
    }

    pub fn rate_percent(&self) -> f64 {
        self.rate_percent
    }

    pub fn rate_basis(&self) -> RateBasis {
        self.rate_basis
    }

    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    pub fn periodic_contribution(&self) -> f64 {
        self.periodic_contribution
    }

    pub fn period_unit(&self) -> PeriodUnit {
        self.compounding.period_unit()
    }

    /// Quoted rate converted to the compounding period
    pub fn per_period_rate(&self) -> f64 {
        let rate = self.rate_percent / 100.0;
        match (self.compounding, self.rate_basis) {
            (Compounding::Monthly, RateBasis::Monthly) => rate,
            (Compounding::Monthly, RateBasis::Annual) => rate / 12.0,
            (Compounding::Yearly, RateBasis::Monthly) => rate * 12.0,
            (Compounding::Yearly, RateBasis::Annual) => rate,
        }
    }

    /// Number of loop iterations: months or years
    pub fn total_iterations(&self) -> u32 {
        match self.compounding {
            // Bounded by MAX_ITERATIONS in `new`
            Compounding::Monthly => self.period_count * 12,
            Compounding::Yearly => self.period_count,
        }
    }

    /// Contributions counted at the annualized rate (contribution * 12 per year),
    /// whatever the compounding frequency
    pub fn total_contributions(&self) -> f64 {
        self.periodic_contribution * 12.0 * self.period_count as f64
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, format!("{} is negative", value)));
    }
    Ok(())
}

/// Unparsed inputs as typed into a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub principal: String,
    pub period_count: String,
    pub rate_percent: String,
    pub rate_is_monthly: bool,
    pub compound_monthly: bool,
    /// Empty means no contribution
    #[serde(default)]
    pub periodic_contribution: String,
}

impl RawInputs {
    /// Parse and validate into `ProjectionParams`
    pub fn parse(&self) -> Result<ProjectionParams> {
        let principal = parse_amount("principal", &self.principal)?;
        let period_count = parse_period_count(&self.period_count)?;
        let rate_percent = parse_amount("rate_percent", &self.rate_percent)?;
        let periodic_contribution = if self.periodic_contribution.trim().is_empty() {
            0.0
        } else {
            parse_amount("periodic_contribution", &self.periodic_contribution)?
        };

        ProjectionParams::new(
            principal,
            period_count,
            rate_percent,
            RateBasis::from_monthly_flag(self.rate_is_monthly),
            Compounding::from_monthly_flag(self.compound_monthly),
            periodic_contribution,
        )
    }
}

fn parse_amount(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ProjectionError::invalid(field, "value is missing"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ProjectionError::invalid(field, format!("'{}' is not a number", trimmed)))?;
    check_amount(field, value)?;
    Ok(value)
}

fn parse_period_count(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ProjectionError::invalid("period_count", "value is missing"));
    }
    if trimmed.starts_with('-') {
        return Err(ProjectionError::invalid(
            "period_count",
            format!("{} is negative", trimmed),
        ));
    }
    trimmed.parse::<u32>().map_err(|_| {
        ProjectionError::invalid(
            "period_count",
            format!("'{}' is not a non-negative integer", trimmed),
        )
    })
}

/// JSON request for a single run
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionRequest {
    pub principal: f64,

    /// Years to project; signed so a negative value is reported as invalid input
    pub period_count: i64,

    pub rate_percent: f64,

    #[serde(default)]
    pub rate_is_monthly: bool,

    #[serde(default = "default_compound_monthly")]
    pub compound_monthly: bool,

    #[serde(default)]
    pub periodic_contribution: f64,
}

fn default_compound_monthly() -> bool { true }

impl TryFrom<ProjectionRequest> for ProjectionParams {
    type Error = ProjectionError;

    fn try_from(request: ProjectionRequest) -> Result<Self> {
        let period_count = u32::try_from(request.period_count).map_err(|_| {
            ProjectionError::invalid(
                "period_count",
                format!("{} is not a non-negative integer", request.period_count),
            )
        })?;

        ProjectionParams::new(
            request.principal,
            period_count,
            request.rate_percent,
            RateBasis::from_monthly_flag(request.rate_is_monthly),
            Compounding::from_monthly_flag(request.compound_monthly),
            request.periodic_contribution,
        )
    }
}
