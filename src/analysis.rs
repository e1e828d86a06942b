use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ingest::{parse_table, validate_rows, ColumnNames};
use crate::ranking::{rank_projects, ScoredProject, Summary};
use crate::scoring::{calculate_score, ScoringConfig};

/// Everything the pipeline needs besides the input bytes.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub columns: ColumnNames,
}

/// Outcome of a successful run, ranked ascending by `rank`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_projects: usize,
    pub summary: Summary,
    pub projects: Vec<ScoredProject>,
}

/// Runs the parse, validate, score, rank and summarize stages with a fixed
/// configuration. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze one complete input. Any parse or validation failure aborts
    /// the run with no partial output.
    pub fn analyze(&self, raw: &[u8]) -> Result<AnalysisResult> {
        tracing::debug!(bytes = raw.len(), "analysis started");

        let table = parse_table(raw, &self.config.columns)?;
        let ignored = table.extra_headers(&self.config.columns);
        if !ignored.is_empty() {
            tracing::debug!(?ignored, "ignoring extra columns");
        }

        let records = validate_rows(&table.rows, &self.config.columns)?;

        let scored = records
            .into_iter()
            .map(|record| {
                let result = calculate_score(&record, &self.config.scoring);
                (record, result)
            })
            .collect();

        let projects = rank_projects(scored);
        let summary = Summary::from_projects(&projects);

        tracing::info!(
            total = projects.len(),
            high = summary.high,
            medium = summary.medium,
            low = summary.low,
            "analysis complete"
        );

        Ok(AnalysisResult {
            total_projects: projects.len(),
            summary,
            projects,
        })
    }
}

/// Analyze with the standard weights, thresholds and column names.
pub fn analyze(raw: &[u8]) -> Result<AnalysisResult> {
    Analyzer::default().analyze(raw)
}
