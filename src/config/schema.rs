use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisConfig;
use crate::ingest::ColumnNames;
use crate::intake::IntakeConfig;
use crate::scoring::ScoringConfig;

/// Contents of the YAML config file. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub columns: ColumnNames,

    #[serde(default)]
    pub intake: IntakeConfig,
}

impl Config {
    /// The part of the config the analysis pipeline consumes.
    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            scoring: self.scoring,
            columns: self.columns.clone(),
        }
    }
}
