//! Error handling for the robot description, path and trajectory readers

use std::io;
use thiserror::Error;

/// Unified error to report failures while reading input files and validating parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("IO Error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse Error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid Length: expected at least {expected} values, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Invalid Columns at line {line}: expected {expected}, found {found}")]
    InvalidColumns { line: usize, expected: usize, found: usize },

    #[error("Empty Table: no data rows found")]
    EmptyTable,

    #[error("Kinematics Configuration Error: {0}")]
    KinematicsConfigurationError(String),
}
