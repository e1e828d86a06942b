use serde::Serialize;
use std::fmt;

use super::config::Thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriorityCategory {
    High,
    Medium,
    Low,
}

impl PriorityCategory {
    /// Place a (rounded) score into its band. Lower bounds are inclusive.
    pub fn for_score(score: f64, thresholds: &Thresholds) -> Self {
        if score >= thresholds.high {
            PriorityCategory::High
        } else if score >= thresholds.medium {
            PriorityCategory::Medium
        } else {
            PriorityCategory::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityCategory::High => "High",
            PriorityCategory::Medium => "Medium",
            PriorityCategory::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_band_lower_bound_inclusive() {
        let t = Thresholds::default();
        assert_eq!(PriorityCategory::for_score(3.8, &t), PriorityCategory::High);
        assert_eq!(PriorityCategory::for_score(5.0, &t), PriorityCategory::High);
    }

    #[test]
    fn test_medium_band() {
        let t = Thresholds::default();
        assert_eq!(PriorityCategory::for_score(2.8, &t), PriorityCategory::Medium);
        assert_eq!(PriorityCategory::for_score(3.79, &t), PriorityCategory::Medium);
    }

    #[test]
    fn test_low_band() {
        let t = Thresholds::default();
        assert_eq!(PriorityCategory::for_score(2.79, &t), PriorityCategory::Low);
        assert_eq!(PriorityCategory::for_score(1.0, &t), PriorityCategory::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds {
            high: 4.5,
            medium: 2.0,
        };
        assert_eq!(PriorityCategory::for_score(4.0, &t), PriorityCategory::Medium);
        assert_eq!(PriorityCategory::for_score(2.0, &t), PriorityCategory::Medium);
        assert_eq!(PriorityCategory::for_score(4.5, &t), PriorityCategory::High);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&PriorityCategory::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        assert_eq!(PriorityCategory::Low.to_string(), "Low");
    }
}
