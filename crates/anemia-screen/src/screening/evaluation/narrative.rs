use super::super::domain::{ProfileCategory, RiskLevel, ScreeningInput};

pub(crate) const DETAIL_SEPARATOR: &str = " | ";

/// Indicators and details string rendered for a scored input.
pub(crate) struct Narrative {
    pub indicators: Vec<String>,
    pub details: String,
}

pub(crate) fn weighted_narrative(input: &ScreeningInput) -> Narrative {
    let mut indicators = Vec::new();
    let mut details = Vec::new();

    if !input.symptoms.is_empty() {
        indicators.push(format!("{} symptôme(s) détecté(s)", input.symptom_count()));
        details.push(format!("Symptômes: {}", input.symptoms.join(", ")));
    }

    indicators.push(format!("Profil: {}", profile_label(input)));

    if input.has_photos {
        indicators.push("Photos analysées: Oui".to_string());
        details.push("Analyse visuelle des photos incluse".to_string());
    } else {
        indicators.push("Photos analysées: Non".to_string());
        details.push("Analyse basée uniquement sur les symptômes".to_string());
    }

    Narrative {
        indicators,
        details: details.join(DETAIL_SEPARATOR),
    }
}

pub(crate) fn simulation_narrative(input: &ScreeningInput, level: RiskLevel) -> Narrative {
    let counted = format!("{} symptôme(s) pris en compte", input.symptom_count());
    let name = input
        .category()
        .map(|category| category.narrative_name())
        .unwrap_or("utilisateur");

    let outlook = match level {
        RiskLevel::Low => "Faible probabilité d'anémie détectée",
        RiskLevel::Medium => "Risque modéré nécessitant une surveillance",
        RiskLevel::High => "Risque élevé - consultation recommandée",
    };

    let details = [format!("Analyse pour {name}"), counted.clone(), outlook.to_string()];

    Narrative {
        indicators: vec![counted, format!("Profil: {}", profile_label(input))],
        details: details.join(DETAIL_SEPARATOR),
    }
}

fn profile_label(input: &ScreeningInput) -> &'static str {
    input
        .category()
        .unwrap_or(ProfileCategory::Adult)
        .label()
}
