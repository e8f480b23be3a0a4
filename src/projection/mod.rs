//! Projection engine for compound-interest growth schedules

mod state;
mod engine;
mod schedule;
pub mod rounding;

pub use state::ProjectionState;
pub use engine::{project, project_raw, ProjectionEngine};
pub use schedule::{PeriodRecord, PeriodUnit, Schedule, ScheduleSummary};
