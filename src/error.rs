//! Error types for projection inputs and report output

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A parameter was missing, non-numeric, non-finite or negative.
    /// Raised before any period is computed.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// Render or export requested before any schedule was computed
    #[error("no schedule has been calculated")]
    NoSchedule,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for the validation failure kind
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ProjectionError::InvalidInput { .. })
    }
}
