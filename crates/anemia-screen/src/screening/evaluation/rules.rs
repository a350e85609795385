use super::super::domain::ScreeningInput;
use super::tables::{
    base_risk_for_count, profile_factor, profile_weight, symptom_weight, PHOTO_ABSENT_SCORE,
    PHOTO_PRESENT_SCORE, PHOTO_SHARE, PROFILE_SHARE, SYMPTOM_SATURATION, SYMPTOM_SHARE,
};

/// Intermediate values behind a total score, kept for audits and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScoreBreakdown {
    Weighted {
        symptom_weight_sum: f64,
        symptom_score: f64,
        profile_score: f64,
        photo_score: f64,
        total_score: f64,
    },
    Scaled {
        base_risk: f64,
        profile_factor: f64,
        total_score: f64,
    },
}

impl ScoreBreakdown {
    pub(crate) fn total_score(&self) -> f64 {
        match self {
            ScoreBreakdown::Weighted { total_score, .. }
            | ScoreBreakdown::Scaled { total_score, .. } => *total_score,
        }
    }
}

pub(crate) fn weighted_score(input: &ScreeningInput) -> ScoreBreakdown {
    let symptom_weight_sum: f64 = input
        .symptoms
        .iter()
        .map(|label| symptom_weight(label))
        .sum();
    let symptom_score = (symptom_weight_sum / SYMPTOM_SATURATION).min(1.0);

    let profile_score = profile_weight(input.category());

    let photo_score = if input.has_photos {
        PHOTO_PRESENT_SCORE
    } else {
        PHOTO_ABSENT_SCORE
    };

    let total_score = (symptom_score * SYMPTOM_SHARE
        + profile_score * PROFILE_SHARE
        + photo_score * PHOTO_SHARE)
        .clamp(0.0, 1.0);

    ScoreBreakdown::Weighted {
        symptom_weight_sum,
        symptom_score,
        profile_score,
        photo_score,
        total_score,
    }
}

pub(crate) fn scaled_score(input: &ScreeningInput) -> ScoreBreakdown {
    let base_risk = base_risk_for_count(input.symptom_count());
    let profile_factor = profile_factor(input.category());

    ScoreBreakdown::Scaled {
        base_risk,
        profile_factor,
        total_score: base_risk * profile_factor,
    }
}
