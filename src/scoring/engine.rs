use super::category::PriorityCategory;
use super::config::ScoringConfig;
use super::explanation::{explain, Tag};
use super::factors::{oriented, Factor};
use crate::ingest::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub factor: Factor,
    pub raw: f64,      // Value as read from the row
    pub oriented: f64, // After inversion of cost factors
    pub weight: f64,
    pub points: f64, // oriented * weight
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub category: PriorityCategory,
    pub explanation: Vec<Tag>,
    pub breakdown: Vec<FactorContribution>,
}

/// Score one validated record. Total over inputs already checked to be in [1, 5].
pub fn calculate_score(record: &Record, config: &ScoringConfig) -> ScoreResult {
    let weights = &config.weights;
    let breakdown: Vec<FactorContribution> = [
        (Factor::Impact, weights.impact),
        (Factor::Urgency, weights.urgency),
        (Factor::Effort, weights.effort),
        (Factor::Cost, weights.cost),
    ]
    .into_iter()
    .map(|(factor, weight)| {
        let raw = factor.value(record);
        let oriented = oriented(factor, raw);
        FactorContribution {
            factor,
            raw,
            oriented,
            weight,
            points: oriented * weight,
        }
    })
    .collect();

    // Sum in formula order so results are reproducible bit for bit
    let score = round2(breakdown.iter().map(|c| c.points).sum());

    ScoreResult {
        score,
        category: PriorityCategory::for_score(score, &config.thresholds),
        explanation: explain(record),
        breakdown,
    }
}

/// Round to two decimal places, correctly rounded on the exact binary value.
///
/// `2.025` is stored as `2.02499..` and rounds down; scaling by 100 first
/// would land on `202.5` and round up.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
