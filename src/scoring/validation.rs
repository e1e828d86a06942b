use super::config::ScoringConfig;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let weights = &config.weights;

    for (name, value) in [
        ("impact", weights.impact),
        ("urgency", weights.urgency),
        ("effort", weights.effort),
        ("cost", weights.cost),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!(
                "scoring.weights.{}: must be a non-negative number (got {})",
                name, value
            ));
        }
    }

    // Only meaningful once every weight is usable
    if errors.is_empty() && (weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!(
            "scoring.weights: must sum to 1.0 (got {})",
            weights.sum()
        ));
    }

    let thresholds = &config.thresholds;
    for (name, value) in [("high", thresholds.high), ("medium", thresholds.medium)] {
        if !value.is_finite() {
            errors.push(format!("scoring.thresholds.{}: must be a finite number", name));
        }
    }
    if thresholds.medium >= thresholds.high {
        errors.push(format!(
            "scoring.thresholds: medium ({}) must be below high ({})",
            thresholds.medium, thresholds.high
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
