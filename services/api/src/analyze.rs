use std::sync::Arc;

use anemia_screen::error::AppError;
use anemia_screen::screening::{
    AnalysisPayload, AnalysisResult, AnalyzerVariant, ScreeningInput, ScreeningService,
    SimulationPayload, UniformConfidence,
};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Profile key: parent, health-agent, teenager, or adult (others score as adult)
    #[arg(long)]
    pub(crate) profile: String,
    /// Reported symptom label. Repeat the flag for several symptoms.
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<String>,
    /// Supporting photos were provided with the questionnaire
    #[arg(long)]
    pub(crate) photos: bool,
    /// Analyzer variant to run (full or simulation)
    #[arg(long, default_value = "full", value_parser = crate::infra::parse_variant)]
    pub(crate) variant: AnalyzerVariant,
    /// Print the HTTP response envelope as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        profile,
        symptoms,
        photos,
        variant,
        json,
    } = args;

    let service = ScreeningService::new(Arc::new(UniformConfidence));

    if json {
        let rendered = match variant {
            AnalyzerVariant::Full => serde_json::to_string_pretty(&service.analyze(
                AnalysisPayload {
                    profile: Some(profile),
                    symptoms: Some(symptoms),
                    has_photos: Some(photos),
                    timestamp: None,
                },
            )?)?,
            AnalyzerVariant::Simulation => {
                serde_json::to_string_pretty(&service.simulate(SimulationPayload {
                    profile: Some(profile),
                    symptoms: Some(symptoms),
                })?)?
            }
        };
        println!("{rendered}");
        return Ok(());
    }

    let (input, result) = service.assess(variant, Some(profile), Some(symptoms), Some(photos))?;
    print!("{}", render_summary(variant, &input, &result));
    Ok(())
}

pub(crate) fn render_summary(
    variant: AnalyzerVariant,
    input: &ScreeningInput,
    result: &AnalysisResult,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Anemia risk screening ({} analyzer)\n",
        variant.label()
    ));
    out.push_str(&format!(
        "Profile: {} | {} symptom(s) | photos: {}\n",
        input.profile,
        input.symptom_count(),
        if input.has_photos { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "\nRisk level: {} (confidence {}%, score {:.2})\n",
        result.risk_level, result.confidence, result.total_score
    ));
    out.push_str(&format!("Details: {}\n", result.details));

    out.push_str("\nIndicators\n");
    for indicator in &result.indicators {
        out.push_str(&format!("- {indicator}\n"));
    }

    out.push_str("\nRecommendations\n");
    for advice in &result.recommendations.general {
        out.push_str(&format!("- {advice}\n"));
    }

    if !result.recommendations.specific.is_empty() {
        out.push_str("\nSymptom-specific advice\n");
        for advice in &result.recommendations.specific {
            out.push_str(&format!("- {advice}\n"));
        }
    }

    out
}
