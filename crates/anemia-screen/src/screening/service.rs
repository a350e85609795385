use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::confidence::{ConfidenceError, ConfidenceSource};
use super::domain::{AnalysisResult, Recommendations, RiskLevel, ScreeningInput};
use super::evaluation::{AnalyzerVariant, RiskEngine};
use super::identifier::{timestamp, AnalysisId};

/// Body accepted by the full analyzer. Missing fields are reported, not defaulted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
    #[serde(default)]
    pub has_photos: Option<bool>,
    /// Client-side capture time, logged only.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

/// Body accepted by the simulation fallback.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationPayload {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
}

/// Response envelope for the full analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub risk_level: RiskLevel,
    pub confidence: u8,
    pub details: String,
    pub timestamp: String,
    pub analysis_id: AnalysisId,
    pub profile_used: String,
    pub symptoms_analyzed: Vec<String>,
    pub indicators: Vec<String>,
    pub recommendations: Recommendations,
}

/// Response envelope for the simulation fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub risk_level: RiskLevel,
    pub confidence: u8,
    pub details: String,
    pub timestamp: String,
    pub simulated: bool,
    pub profile: String,
    pub symptoms_count: usize,
    pub risk_score: f64,
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("Le profil et les symptômes sont requis")]
    IncompleteRequest,
    #[error(transparent)]
    Confidence(#[from] ConfidenceError),
}

/// Service validating requests and running the analyzer variants.
pub struct ScreeningService<C> {
    full: RiskEngine,
    simulation: RiskEngine,
    confidence: Arc<C>,
}

impl<C> ScreeningService<C>
where
    C: ConfidenceSource + 'static,
{
    pub fn new(confidence: Arc<C>) -> Self {
        Self {
            full: RiskEngine::new(AnalyzerVariant::Full),
            simulation: RiskEngine::new(AnalyzerVariant::Simulation),
            confidence,
        }
    }

    /// Run the weighted analyzer and wrap the result with an id and timestamp.
    pub fn analyze(&self, payload: AnalysisPayload) -> Result<AnalysisReport, ScreeningError> {
        let AnalysisPayload {
            profile,
            symptoms,
            has_photos,
            timestamp: client_timestamp,
        } = payload;

        if let Some(client_timestamp) = &client_timestamp {
            debug!(%client_timestamp, "client capture time reported");
        }

        let (input, result) = self.assess(AnalyzerVariant::Full, profile, symptoms, has_photos)?;
        let ScreeningInput {
            profile, symptoms, ..
        } = input;

        Ok(AnalysisReport {
            risk_level: result.risk_level,
            confidence: result.confidence,
            details: result.details,
            timestamp: timestamp(),
            analysis_id: AnalysisId::generate(),
            profile_used: profile,
            symptoms_analyzed: symptoms,
            indicators: result.indicators,
            recommendations: result.recommendations,
        })
    }

    /// Run the count-based fallback analyzer.
    pub fn simulate(&self, payload: SimulationPayload) -> Result<SimulationReport, ScreeningError> {
        let (input, result) = self.assess(
            AnalyzerVariant::Simulation,
            payload.profile,
            payload.symptoms,
            None,
        )?;

        Ok(SimulationReport {
            risk_level: result.risk_level,
            confidence: result.confidence,
            details: result.details,
            timestamp: timestamp(),
            simulated: true,
            symptoms_count: input.symptom_count(),
            profile: input.profile,
            risk_score: round_to_hundredths(result.total_score),
        })
    }

    /// Validate raw request fields and run the chosen variant. Every entry point comes through here.
    pub fn assess(
        &self,
        variant: AnalyzerVariant,
        profile: Option<String>,
        symptoms: Option<Vec<String>>,
        has_photos: Option<bool>,
    ) -> Result<(ScreeningInput, AnalysisResult), ScreeningError> {
        info!(
            %variant,
            profile = profile.as_deref().unwrap_or_default(),
            symptoms_count = symptoms.as_ref().map(Vec::len).unwrap_or(0),
            has_photos = ?has_photos,
            "screening request received"
        );

        let input = require_input(profile, symptoms, has_photos)?;
        let engine = match variant {
            AnalyzerVariant::Full => &self.full,
            AnalyzerVariant::Simulation => &self.simulation,
        };
        let result = self.run(engine, &input)?;

        info!(
            %variant,
            risk_level = %result.risk_level,
            confidence = result.confidence,
            "screening completed"
        );

        Ok((input, result))
    }

    fn run(
        &self,
        engine: &RiskEngine,
        input: &ScreeningInput,
    ) -> Result<AnalysisResult, ScreeningError> {
        engine
            .evaluate(input, self.confidence.as_ref())
            .map_err(|err| {
                error!(variant = %engine.variant(), error = %err, "risk evaluation failed");
                ScreeningError::from(err)
            })
    }
}

fn require_input(
    profile: Option<String>,
    symptoms: Option<Vec<String>>,
    has_photos: Option<bool>,
) -> Result<ScreeningInput, ScreeningError> {
    match (profile, symptoms) {
        (Some(profile), Some(symptoms)) if !profile.is_empty() => Ok(ScreeningInput::new(
            profile,
            symptoms,
            has_photos.unwrap_or(false),
        )),
        _ => {
            warn!("rejecting request without profile or symptoms");
            Err(ScreeningError::IncompleteRequest)
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
