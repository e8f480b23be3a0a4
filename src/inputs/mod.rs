//! Projection inputs: validated parameters, raw form values and file loaders

mod data;
pub mod loader;

pub use data::{Compounding, ProjectionParams, ProjectionRequest, RateBasis, RawInputs, MAX_ITERATIONS};
pub use loader::{load_request, load_scenarios, load_scenarios_from_reader, parse_request, Scenario};
