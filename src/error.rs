use thiserror::Error;

use crate::ingest::RowError;

/// Errors that abort an analysis run. None of them are retried; the caller
/// receives the message verbatim.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// No header row at all.
    #[error("The uploaded CSV file appears to be empty.")]
    EmptyInput,

    /// One or more required headers are absent. Both lists are sorted.
    #[error(
        "Missing required columns: {}. Required columns are: {}.",
        .missing.join(", "),
        .required.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },

    /// Header present, zero data rows.
    #[error("The CSV file contains headers but no project data rows.")]
    NoDataRows,

    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),

    /// Every row-level problem in the batch, in row then field order.
    #[error("Validation errors found:\n{}", join_lines(.0))]
    Validation(Vec<RowError>),
}

/// Decode or structural failure while reading the table.
#[derive(Debug, Error)]
pub enum MalformedInput {
    #[error("Unable to read the file. Ensure it is a valid UTF-8 CSV.")]
    Encoding(#[source] std::str::Utf8Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[source] csv::Error),
}

/// How a transport layer should classify a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The input was unacceptable (HTTP 400).
    BadRequest,
}

impl AnalysisError {
    pub fn class(&self) -> ErrorClass {
        ErrorClass::BadRequest
    }

    /// Row errors when this is a validation failure, otherwise empty.
    pub fn row_errors(&self) -> &[RowError] {
        match self {
            AnalysisError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_lines(errors: &[RowError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
