//! Anemia risk screening: symptom scoring, tier classification, and advice lookup.
//!
//! Two analyzer variants share one classifier and one set of recommendation tables.
//! Everything here is request-scoped; the only non-determinism is the confidence
//! draw, which goes through [`ConfidenceSource`].

pub mod confidence;
pub mod domain;
pub mod evaluation;
pub mod identifier;
pub mod recommendations;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use confidence::{ConfidenceBand, ConfidenceError, ConfidenceSource, UniformConfidence};
pub use domain::{AnalysisResult, ProfileCategory, Recommendations, RiskLevel, ScreeningInput};
pub use evaluation::{classify, tier_for, AnalyzerVariant, ConfidenceBands, RiskEngine};
pub use identifier::{timestamp, AnalysisId};
pub use recommendations::recommend;
pub use router::screening_router;
pub use service::{
    AnalysisPayload, AnalysisReport, ScreeningError, ScreeningService, SimulationPayload,
    SimulationReport,
};
