//! Constant scoring tables. Keys in [`SYMPTOM_WEIGHTS`] are stored case-folded.

use super::super::domain::ProfileCategory;

pub(crate) const SYMPTOM_WEIGHTS: [(&str, f64); 10] = [
    ("fatigue", 0.3),
    ("vertiges ou étourdissements", 0.4),
    ("palpitations", 0.5),
    ("maux de tête", 0.2),
    ("essoufflement", 0.6),
    ("respiration rapide", 0.5),
    ("étourdissements au lever", 0.4),
    ("difficultés de concentration", 0.3),
    ("pâleur de la peau", 0.7),
    ("ongles cassants", 0.6),
];

pub(crate) const UNKNOWN_SYMPTOM_WEIGHT: f64 = 0.2;

/// Share of the full-variant score carried by each input.
pub(crate) const SYMPTOM_SHARE: f64 = 0.6;
pub(crate) const PROFILE_SHARE: f64 = 0.2;
pub(crate) const PHOTO_SHARE: f64 = 0.2;

/// Summed symptom weight that saturates the symptom contribution.
pub(crate) const SYMPTOM_SATURATION: f64 = 2.0;

pub(crate) const PHOTO_PRESENT_SCORE: f64 = 0.7;
pub(crate) const PHOTO_ABSENT_SCORE: f64 = 0.3;

pub(crate) fn symptom_weight(label: &str) -> f64 {
    let folded = label.to_lowercase();
    SYMPTOM_WEIGHTS
        .iter()
        .find(|(key, _)| *key == folded)
        .map(|(_, weight)| *weight)
        .unwrap_or(UNKNOWN_SYMPTOM_WEIGHT)
}

pub(crate) fn profile_weight(category: Option<ProfileCategory>) -> f64 {
    match category {
        Some(ProfileCategory::Parent) => 0.3,
        Some(ProfileCategory::HealthAgent) => 0.4,
        Some(ProfileCategory::Teenager) => 0.5,
        Some(ProfileCategory::Adult) | None => 0.4,
    }
}

pub(crate) fn profile_factor(category: Option<ProfileCategory>) -> f64 {
    match category {
        Some(ProfileCategory::Parent) => 0.9,
        Some(ProfileCategory::Teenager) => 1.1,
        Some(ProfileCategory::HealthAgent) | Some(ProfileCategory::Adult) | None => 1.0,
    }
}

/// Step function used by the simulation variant.
pub(crate) fn base_risk_for_count(symptom_count: usize) -> f64 {
    match symptom_count {
        0 => 0.2,
        1..=2 => 0.4,
        3..=4 => 0.6,
        _ => 0.8,
    }
}
