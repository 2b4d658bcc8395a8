//! Error types for the conversion engine

use std::fmt;

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A stage is missing a required field or has it in the wrong shape
    #[error("Malformed stage at index {index}: field '{field}' is {problem}")]
    MalformedStage {
        /// Position of the stage in the source pipeline
        index: usize,
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        problem: FieldProblem,
    },
}

/// Why a stage field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    WrongType,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => write!(f, "missing"),
            FieldProblem::WrongType => write!(f, "of the wrong type"),
        }
    }
}

impl ConvertError {
    /// Create a malformed stage error
    pub fn malformed_stage(index: usize, field: &'static str, problem: FieldProblem) -> Self {
        Self::MalformedStage {
            index,
            field,
            problem,
        }
    }

    /// Check if this error is a malformed stage error
    pub fn is_malformed_stage(&self) -> bool {
        matches!(self, Self::MalformedStage { .. })
    }
}
