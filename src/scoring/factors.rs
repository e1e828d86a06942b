use crate::ingest::Record;

/// One of the four scored inputs of a project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Impact,
    Urgency,
    Effort,
    Cost,
}

impl Factor {
    /// Read this factor's value from a record.
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Factor::Impact => record.impact,
            Factor::Urgency => record.urgency,
            Factor::Effort => record.effort,
            Factor::Cost => record.cost,
        }
    }

    /// True for factors that count against a project (higher is worse).
    pub fn is_inverted(&self) -> bool {
        matches!(self, Factor::Effort | Factor::Cost)
    }
}

/// Inclusive one-sided bound on a factor value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match self {
            Bound::AtLeast(n) => value >= *n,
            Bound::AtMost(n) => value <= *n,
        }
    }
}

/// Map a factor onto the "higher is better" axis. Scores live in [1, 5], so
/// `6 - x` keeps the inverted value in the same range.
pub fn oriented(factor: Factor, value: f64) -> f64 {
    if factor.is_inverted() {
        6.0 - value
    } else {
        value
    }
}
