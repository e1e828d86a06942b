use serde::Serialize;
use std::fmt;

use super::factors::{Bound, Factor};
use crate::ingest::Record;

/// Qualitative label describing why a project scored the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    #[serde(rename = "High Impact")]
    HighImpact,
    #[serde(rename = "Urgent")]
    Urgent,
    #[serde(rename = "Low Effort")]
    LowEffort,
    #[serde(rename = "Cost Efficient")]
    CostEfficient,
    #[serde(rename = "High Effort")]
    HighEffort,
    #[serde(rename = "Expensive")]
    Expensive,
    /// Emitted alone when no other tag applies.
    #[serde(rename = "Balanced")]
    Balanced,
}

/// Tags in evaluation order, each with the rule that triggers it.
const RULES: [(Tag, Factor, Bound); 6] = [
    (Tag::HighImpact, Factor::Impact, Bound::AtLeast(4.0)),
    (Tag::Urgent, Factor::Urgency, Bound::AtLeast(4.0)),
    (Tag::LowEffort, Factor::Effort, Bound::AtMost(2.0)),
    (Tag::CostEfficient, Factor::Cost, Bound::AtMost(2.0)),
    (Tag::HighEffort, Factor::Effort, Bound::AtLeast(4.0)),
    (Tag::Expensive, Factor::Cost, Bound::AtLeast(4.0)),
];

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::HighImpact => "High Impact",
            Tag::Urgent => "Urgent",
            Tag::LowEffort => "Low Effort",
            Tag::CostEfficient => "Cost Efficient",
            Tag::HighEffort => "High Effort",
            Tag::Expensive => "Expensive",
            Tag::Balanced => "Balanced",
        }
    }

    /// Cautions point at something that drags the project down.
    pub fn is_caution(&self) -> bool {
        matches!(self, Tag::HighEffort | Tag::Expensive)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the ordered tag list for a record. Never empty.
pub fn explain(record: &Record) -> Vec<Tag> {
    let tags: Vec<Tag> = RULES
        .iter()
        .filter(|(_, factor, bound)| bound.matches(factor.value(record)))
        .map(|(tag, _, _)| *tag)
        .collect();

    if tags.is_empty() {
        vec![Tag::Balanced]
    } else {
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(impact: f64, urgency: f64, effort: f64, cost: f64) -> Record {
        Record {
            project_name: "Test".to_string(),
            impact,
            urgency,
            effort,
            cost,
        }
    }

    #[test]
    fn test_all_positive_tags_in_order() {
        let tags = explain(&record(5.0, 5.0, 1.0, 1.0));
        assert_eq!(
            tags,
            vec![Tag::HighImpact, Tag::Urgent, Tag::LowEffort, Tag::CostEfficient]
        );
    }

    #[test]
    fn test_caution_tags_without_balanced() {
        let tags = explain(&record(1.0, 1.0, 5.0, 5.0));
        assert_eq!(tags, vec![Tag::HighEffort, Tag::Expensive]);
        assert!(tags.iter().all(Tag::is_caution));
    }

    #[test]
    fn test_balanced_when_nothing_applies() {
        assert_eq!(explain(&record(3.0, 3.0, 3.0, 3.0)), vec![Tag::Balanced]);
    }

    #[test]
    fn test_boundary_values() {
        // 4 triggers "at least 4" rules, 2 triggers "at most 2" rules
        let tags = explain(&record(4.0, 3.9, 2.0, 4.0));
        assert_eq!(tags, vec![Tag::HighImpact, Tag::LowEffort, Tag::Expensive]);

        let tags = explain(&record(3.9, 4.0, 2.1, 3.9));
        assert_eq!(tags, vec![Tag::Urgent]);
    }

    #[test]
    fn test_mixed_positive_and_caution() {
        let tags = explain(&record(5.0, 2.0, 4.0, 1.0));
        assert_eq!(tags, vec![Tag::HighImpact, Tag::CostEfficient, Tag::HighEffort]);
    }

    #[test]
    fn test_tag_serializes_as_label() {
        let json = serde_json::to_string(&vec![Tag::CostEfficient, Tag::HighEffort]).unwrap();
        assert_eq!(json, r#"["Cost Efficient","High Effort"]"#);
    }

    #[test]
    fn test_only_effort_and_cost_tags_are_cautions() {
        assert!(!Tag::HighImpact.is_caution());
        assert!(!Tag::Balanced.is_caution());
        assert!(Tag::HighEffort.is_caution());
        assert!(Tag::Expensive.is_caution());
    }
}
