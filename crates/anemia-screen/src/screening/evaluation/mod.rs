mod narrative;
mod policy;
mod rules;
mod tables;

pub use policy::{
    classify, tier_for, ConfidenceBands, HIGH_THRESHOLD, MEDIUM_THRESHOLD, SIMULATION_BANDS,
    WEIGHTED_BANDS,
};

pub(crate) use rules::ScoreBreakdown;
#[cfg(test)]
pub(crate) use tables::SYMPTOM_WEIGHTS;

use std::fmt;
use std::str::FromStr;

use super::confidence::{ConfidenceError, ConfidenceSource};
use super::domain::{AnalysisResult, ScreeningInput};
use super::recommendations::recommend;

/// Scoring strategy. Both variants share the classifier and the recommendation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerVariant {
    /// Weighted symptoms, profile, and imagery (60/20/20).
    Full,
    /// Symptom count scaled by a profile factor.
    Simulation,
}

impl AnalyzerVariant {
    pub fn label(&self) -> &'static str {
        match self {
            AnalyzerVariant::Full => "full",
            AnalyzerVariant::Simulation => "simulation",
        }
    }

    /// Total risk score. Clamped to [0, 1] for `Full`; `Simulation` may exceed 1.
    pub fn score(&self, input: &ScreeningInput) -> f64 {
        self.breakdown(input).total_score()
    }

    pub fn bands(&self) -> &'static ConfidenceBands {
        match self {
            AnalyzerVariant::Full => &WEIGHTED_BANDS,
            AnalyzerVariant::Simulation => &SIMULATION_BANDS,
        }
    }

    pub(crate) fn breakdown(&self, input: &ScreeningInput) -> ScoreBreakdown {
        match self {
            AnalyzerVariant::Full => rules::weighted_score(input),
            AnalyzerVariant::Simulation => rules::scaled_score(input),
        }
    }
}

impl fmt::Display for AnalyzerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalyzerVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" | "analyze" => Ok(Self::Full),
            "simulation" | "simulate" => Ok(Self::Simulation),
            other => Err(format!(
                "unknown analyzer variant '{other}' (expected full or simulation)"
            )),
        }
    }
}

/// Stateless evaluator running one variant end to end.
#[derive(Debug, Clone, Copy)]
pub struct RiskEngine {
    variant: AnalyzerVariant,
}

impl RiskEngine {
    pub fn new(variant: AnalyzerVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> AnalyzerVariant {
        self.variant
    }

    pub fn evaluate(
        &self,
        input: &ScreeningInput,
        source: &dyn ConfidenceSource,
    ) -> Result<AnalysisResult, ConfidenceError> {
        let total_score = self.variant.score(input);
        let (risk_level, confidence) = classify(total_score, self.variant.bands(), source)?;

        let narrative = match self.variant {
            AnalyzerVariant::Full => narrative::weighted_narrative(input),
            AnalyzerVariant::Simulation => narrative::simulation_narrative(input, risk_level),
        };

        Ok(AnalysisResult {
            risk_level,
            confidence,
            indicators: narrative.indicators,
            details: narrative.details,
            recommendations: recommend(risk_level, &input.symptoms),
            total_score,
        })
    }
}
