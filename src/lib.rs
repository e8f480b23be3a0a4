//! Compound Growth - period-by-period projection of compound-interest balances
//!
//! This library provides:
//! - Validated projection inputs (principal, rate, compounding, contributions)
//! - The projection engine producing per-period schedules and totals
//! - Localized text tables and CSV export of schedules
//! - Batch scenario runs

pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod app;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use inputs::{Compounding, ProjectionParams, RateBasis, RawInputs};
pub use projection::{project, project_raw, PeriodRecord, PeriodUnit, ProjectionEngine, Schedule};
pub use app::AppState;
pub use scenario::ScenarioRunner;
