use std::fmt;

use super::parser::Row;
use super::record::{ColumnNames, Record};
use crate::error::{AnalysisError, Result};

const SCORE_MIN: f64 = 1.0;
const SCORE_MAX: f64 = 5.0;

/// A single problem found in one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based source row; the header is row 1.
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: '{}' {}.", self.row, self.field, self.message)
    }
}

/// Row number of the data row at `index` (0-based) in the table.
pub fn row_number(index: usize) -> usize {
    index + 2
}

/// Check one row and return every problem found, in field order.
/// An empty list means the row is valid.
pub fn validate_row(row: &Row, row_number: usize, columns: &ColumnNames) -> Vec<RowError> {
    match check_row(row, row_number, columns) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    }
}

/// Validate the whole batch. All rows are checked before anything is
/// reported; a single bad row rejects the batch.
pub fn validate_rows(rows: &[Row], columns: &ColumnNames) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match check_row(row, row_number(index), columns) {
            Ok(record) => records.push(record),
            Err(row_errors) => errors.extend(row_errors),
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        tracing::warn!(errors = errors.len(), rows = rows.len(), "batch rejected");
        Err(AnalysisError::Validation(errors))
    }
}

fn check_row(
    row: &Row,
    row_number: usize,
    columns: &ColumnNames,
) -> std::result::Result<Record, Vec<RowError>> {
    let mut errors = Vec::new();
    let mut error = |field: &str, message: String| {
        errors.push(RowError {
            row: row_number,
            field: field.to_string(),
            message,
        })
    };

    let mut scores = [0.0_f64; 4];
    for (slot, field) in scores.iter_mut().zip(columns.scores()) {
        match parse_score(field_value(row, field)) {
            Ok(value) => *slot = value,
            Err(message) => error(field, message),
        }
    }

    let project_name = field_value(row, &columns.project_name);
    if project_name.is_empty() {
        error(&columns.project_name, "is missing or empty".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let [impact, urgency, effort, cost] = scores;
    Ok(Record {
        project_name: project_name.to_string(),
        impact,
        urgency,
        effort,
        cost,
    })
}

/// Trimmed cell value; an absent cell reads as empty.
fn field_value<'a>(row: &'a Row, field: &str) -> &'a str {
    row.get(field).map(|v| v.trim()).unwrap_or("")
}

fn parse_score(value: &str) -> std::result::Result<f64, String> {
    if value.is_empty() {
        return Err("is missing or empty".to_string());
    }

    let number = match value.parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => return Err(format!("must be a number (got '{}')", value)),
    };

    if number < SCORE_MIN || number > SCORE_MAX {
        return Err(format!(
            "must be between {} and {} (got {})",
            SCORE_MIN as i64,
            SCORE_MAX as i64,
            render_number(number)
        ));
    }

    Ok(number)
}

/// Shortest round-trip form, with a signed two-digit exponent in
/// scientific notation (`6.0`, `1e+16`, `1.5e-05`).
fn render_number(value: f64) -> String {
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}
