use serde::{Deserialize, Serialize};

/// A validated project row. Built only by the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub project_name: String,
    pub impact: f64,
    pub urgency: f64,
    pub effort: f64,
    pub cost: f64,
}

/// Header names of the required columns.
///
/// Matching is exact after trimming surrounding whitespace from the header.
/// Any other column in the file is carried through the parser and ignored.
///
/// Example YAML:
/// ```yaml
/// columns:
///   project_name: "Project"
///   impact: "Impact"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
    pub project_name: String,
    pub impact: String,
    pub urgency: String,
    pub effort: String,
    pub cost: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            project_name: "Project Name".to_string(),
            impact: "Impact Score".to_string(),
            urgency: "Urgency Score".to_string(),
            effort: "Effort Score".to_string(),
            cost: "Cost Score".to_string(),
        }
    }
}

impl ColumnNames {
    /// Numeric columns in validation order.
    pub fn scores(&self) -> [&str; 4] {
        [&self.impact, &self.urgency, &self.effort, &self.cost]
    }

    /// Every required header, sorted.
    pub fn required(&self) -> Vec<String> {
        let mut names: Vec<String> = std::iter::once(self.project_name.as_str())
            .chain(self.scores())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
