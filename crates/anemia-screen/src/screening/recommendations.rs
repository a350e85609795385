//! Tier advice plus symptom-triggered advice.
//!
//! Specific advice matches labels exactly as submitted (`"Fatigue"` but not
//! `"fatigue"`), unlike the case-folded weight lookup used for scoring.

use super::domain::{Recommendations, RiskLevel};

const LOW_GENERAL: [&str; 2] = [
    "Continuez à avoir une alimentation équilibrée riche en fer",
    "Consultez un médecin si de nouveaux symptômes apparaissent",
];

const MEDIUM_GENERAL: [&str; 3] = [
    "Consultez un professionnel de santé pour un diagnostic complet",
    "Augmentez votre consommation d'aliments riches en fer",
    "Évitez le thé et café pendant les repas",
];

const HIGH_GENERAL: [&str; 3] = [
    "Consultez rapidement un médecin ou un centre de santé",
    "Un bilan sanguin (NFS) est recommandé",
    "Suivez les conseils nutritionnels fournis",
];

pub const FATIGUE_LABEL: &str = "Fatigue";
pub const VISUAL_SIGN_LABELS: [&str; 2] = ["Pâleur de la peau", "Ongles cassants"];

pub const FATIGUE_ADVICE: &str = "Reposez-vous suffisamment et évitez les efforts intenses";
pub const VISUAL_SIGN_ADVICE: &str = "Ces symptômes visuels nécessitent une consultation médicale";

pub fn general_advice(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => &LOW_GENERAL,
        RiskLevel::Medium => &MEDIUM_GENERAL,
        RiskLevel::High => &HIGH_GENERAL,
    }
}

pub fn recommend(level: RiskLevel, symptoms: &[String]) -> Recommendations {
    let reported = |label: &str| symptoms.iter().any(|symptom| symptom == label);

    let mut specific = Vec::new();
    if reported(FATIGUE_LABEL) {
        specific.push(FATIGUE_ADVICE.to_string());
    }
    if VISUAL_SIGN_LABELS.iter().any(|label| reported(label)) {
        specific.push(VISUAL_SIGN_ADVICE.to_string());
    }

    Recommendations {
        general: general_advice(level)
            .iter()
            .map(|advice| advice.to_string())
            .collect(),
        specific,
    }
}
