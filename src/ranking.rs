use serde::Serialize;

use crate::ingest::Record;
use crate::scoring::{FactorContribution, PriorityCategory, ScoreResult, Tag};

/// A project with its score and final position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProject {
    pub project_name: String,
    pub impact: f64,
    pub urgency: f64,
    pub effort: f64,
    pub cost: f64,
    pub priority_score: f64,
    pub priority_category: PriorityCategory,
    pub explanation: Vec<Tag>,
    /// 1-based position after sorting. Ties get consecutive ranks.
    pub rank: usize,
    #[serde(skip)]
    pub breakdown: Vec<FactorContribution>,
}

/// Category counts over a full result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    pub fn from_projects(projects: &[ScoredProject]) -> Self {
        projects
            .iter()
            .fold(Summary::default(), |mut summary, project| {
                match project.priority_category {
                    PriorityCategory::High => summary.high += 1,
                    PriorityCategory::Medium => summary.medium += 1,
                    PriorityCategory::Low => summary.low += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Sort scored records by score descending and assign ranks 1..=N.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_projects(scored: Vec<(Record, ScoreResult)>) -> Vec<ScoredProject> {
    let mut scored = scored;
    scored.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (record, result))| ScoredProject {
            project_name: record.project_name,
            impact: record.impact,
            urgency: record.urgency,
            effort: record.effort,
            cost: record.cost,
            priority_score: result.score,
            priority_category: result.category,
            explanation: result.explanation,
            rank: index + 1,
            breakdown: result.breakdown,
        })
        .collect()
}
