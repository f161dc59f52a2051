//! Error type for scheduling runs.

use std::fmt;

use crate::validation::ValidationError;

/// Errors surfaced by the schedulers and the metrics aggregator.
///
/// Every variant is raised before any output is produced, so callers never
/// see a partial schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// The process set failed validation.
    InvalidInput(Vec<ValidationError>),
    /// An algorithm parameter is out of range (e.g., quantum <= 0).
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable description.
        message: String,
    },
    /// Metrics were requested for a result with no summaries.
    EmptyResult,
}

impl SchedulingError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Self::EmptyResult => write!(f, "schedule result has no process summaries"),
        }
    }
}

impl std::error::Error for SchedulingError {}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
