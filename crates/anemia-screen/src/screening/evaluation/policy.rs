use super::super::confidence::{ConfidenceBand, ConfidenceError, ConfidenceSource};
use super::super::domain::RiskLevel;

/// Scores strictly below this value are low risk.
pub const MEDIUM_THRESHOLD: f64 = 0.3;
/// Scores at or above this value are high risk.
pub const HIGH_THRESHOLD: f64 = 0.6;

/// Confidence band per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceBands {
    pub low: ConfidenceBand,
    pub medium: ConfidenceBand,
    pub high: ConfidenceBand,
}

impl ConfidenceBands {
    pub fn for_level(&self, level: RiskLevel) -> ConfidenceBand {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }
}

pub const WEIGHTED_BANDS: ConfidenceBands = ConfidenceBands {
    low: ConfidenceBand::new(85, 10),
    medium: ConfidenceBand::new(70, 15),
    high: ConfidenceBand::new(80, 15),
};

pub const SIMULATION_BANDS: ConfidenceBands = ConfidenceBands {
    low: ConfidenceBand::new(80, 15),
    medium: ConfidenceBand::new(70, 20),
    high: ConfidenceBand::new(75, 20),
};

/// Tier for a score; a score equal to a threshold belongs to the upper tier.
pub fn tier_for(score: f64) -> RiskLevel {
    if score < MEDIUM_THRESHOLD {
        RiskLevel::Low
    } else if score < HIGH_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Assign a tier and draw a fresh confidence value from its band.
pub fn classify(
    score: f64,
    bands: &ConfidenceBands,
    source: &dyn ConfidenceSource,
) -> Result<(RiskLevel, u8), ConfidenceError> {
    let level = tier_for(score);
    let confidence = source.draw(bands.for_level(level))?;
    Ok((level, confidence))
}
