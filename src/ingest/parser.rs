use std::collections::{BTreeMap, HashSet};

use csv::ReaderBuilder;

use super::record::ColumnNames;
use crate::error::{AnalysisError, MalformedInput, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One data row: trimmed header name -> raw cell value (untrimmed).
pub type Row = BTreeMap<String, String>;

/// Parsed table in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Trimmed header names, including columns nobody asked for.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Headers that are not part of the required set.
    pub fn extra_headers<'a>(&'a self, columns: &ColumnNames) -> Vec<&'a str> {
        let required: HashSet<String> = columns.required().into_iter().collect();
        self.headers
            .iter()
            .filter(|h| !required.contains(h.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Parse raw delimited bytes into rows keyed by trimmed header name.
///
/// Checks, in order: UTF-8 decoding (a leading BOM is dropped), presence of
/// a header row, presence of every required header, at least one data row.
/// Rows shorter than the header simply lack the trailing keys; cells past
/// the last header are dropped.
pub fn parse_table(raw: &[u8], columns: &ColumnNames) -> Result<Table> {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let text = std::str::from_utf8(raw).map_err(MalformedInput::Encoding)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(MalformedInput::Csv)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let present: HashSet<&str> = headers.iter().map(String::as_str).collect();
    let required = columns.required();
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !present.contains(name.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(AnalysisError::MissingColumns { missing, required });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(MalformedInput::Csv)?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(AnalysisError::NoDataRows);
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "parsed table");
    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Project Name,Impact Score,Urgency Score,Effort Score,Cost Score";

    fn parse(input: &str) -> Result<Table> {
        parse_table(input.as_bytes(), &ColumnNames::default())
    }

    #[test]
    fn test_parse_simple_table() {
        let table = parse(&format!("{}\nAlpha,5,4,2,1\nBeta,3,3,3,3\n", HEADER)).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["Project Name"], "Alpha");
        assert_eq!(table.rows[1]["Cost Score"], "3");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn test_bom_only_is_empty() {
        let result = parse_table(UTF8_BOM, &ColumnNames::default());
        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn test_header_only_has_no_data_rows() {
        assert!(matches!(parse(HEADER), Err(AnalysisError::NoDataRows)));
        assert!(matches!(
            parse(&format!("{}\n", HEADER)),
            Err(AnalysisError::NoDataRows)
        ));
    }

    #[test]
    fn test_strips_bom_and_trims_headers() {
        let input =
            "\u{feff} Project Name , Impact Score,Urgency Score ,Effort Score,Cost Score\nAlpha,5,4,2,1\n";
        let table = parse(input).unwrap();
        assert_eq!(table.headers[0], "Project Name");
        assert_eq!(table.rows[0]["Urgency Score"], "4");
    }

    #[test]
    fn test_values_are_not_trimmed_by_parser() {
        let table = parse(&format!("{}\n  Alpha  , 5 ,4,2,1\n", HEADER)).unwrap();
        assert_eq!(table.rows[0]["Project Name"], "  Alpha  ");
        assert_eq!(table.rows[0]["Impact Score"], " 5 ");
    }

    #[test]
    fn test_missing_columns_sorted() {
        let err = parse("Project Name,Urgency Score,Effort Score\nAlpha,4,2\n").unwrap_err();
        match err {
            AnalysisError::MissingColumns { missing, required } => {
                assert_eq!(missing, vec!["Cost Score", "Impact Score"]);
                assert_eq!(required.len(), 5);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_cost_column_named_exactly() {
        let err = parse("Project Name,Impact Score,Urgency Score,Effort Score\nA,1,1,1\n").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Missing required columns: Cost Score. Required columns are:"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let input = "Owner,Project Name,Impact Score,Urgency Score,Effort Score,Cost Score,Notes\n\
                     Ann,Alpha,5,4,2,1,fast\n";
        let table = parse(input).unwrap();
        assert_eq!(table.extra_headers(&ColumnNames::default()), vec!["Owner", "Notes"]);
        assert_eq!(table.rows[0]["Project Name"], "Alpha");
    }

    #[test]
    fn test_short_row_lacks_trailing_fields() {
        let table = parse(&format!("{}\nAlpha,5,4\n", HEADER)).unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert!(!table.rows[0].contains_key("Cost Score"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse(&format!("{}\n\nAlpha,5,4,2,1\n\nBeta,1,1,1,1\n", HEADER)).unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse(&format!("{}\n\"Alpha, Phase 2\",5,4,2,1\n", HEADER)).unwrap();
        assert_eq!(table.rows[0]["Project Name"], "Alpha, Phase 2");
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut raw = format!("{}\n", HEADER).into_bytes();
        raw.extend_from_slice(&[0xff, 0xfe, b',', b'1']);
        let err = parse_table(&raw, &ColumnNames::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::MalformedInput(MalformedInput::Encoding(_))
        ));
        assert_eq!(
            err.to_string(),
            "Unable to read the file. Ensure it is a valid UTF-8 CSV."
        );
    }

    #[test]
    fn test_custom_column_names() {
        let columns = ColumnNames {
            project_name: "Name".to_string(),
            ..ColumnNames::default()
        };
        let input = "Name,Impact Score,Urgency Score,Effort Score,Cost Score\nAlpha,5,4,2,1\n";
        let table = parse_table(input.as_bytes(), &columns).unwrap();
        assert_eq!(table.rows[0]["Name"], "Alpha");
    }
}
