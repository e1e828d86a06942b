use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Holds the weights of the priority formula and the category bands. The
/// defaults are the standard model; a config file may override either part.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     impact: 0.35
///     urgency: 0.30
///     effort: 0.20
///     cost: 0.15
///   thresholds:
///     high: 3.8
///     medium: 2.8
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Factor weights (default: 0.35 / 0.30 / 0.20 / 0.15)
    #[serde(default)]
    pub weights: Weights,

    /// Lower bounds of the High and Medium bands (default: 3.8 / 2.8)
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Weights of the four factors. They are expected to sum to 1.0.
///
/// Effort and cost are cost factors: the engine inverts them (`6 - x`) before
/// weighting, so a higher weight here means "cheap projects matter more".
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub impact: f64,
    pub urgency: f64,
    pub effort: f64,
    pub cost: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.impact + self.urgency + self.effort + self.cost
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            impact: 0.35,
            urgency: 0.30,
            effort: 0.20,
            cost: 0.15,
        }
    }
}

/// Category bands. Each bound is inclusive: `score >= high` is High,
/// `medium <= score < high` is Medium, anything lower is Low.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high: 3.8,
            medium: 2.8,
        }
    }
}
