use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::CorsConfig;
use crate::screening::confidence::{ConfidenceBand, ConfidenceError, ConfidenceSource};
use crate::screening::domain::ScreeningInput;
use crate::screening::router::screening_router;
use crate::screening::service::ScreeningService;

/// Returns the lowest value of every band and remembers which bands were asked for.
#[derive(Default)]
pub(super) struct RecordingConfidence {
    draws: Mutex<Vec<ConfidenceBand>>,
}

impl RecordingConfidence {
    pub(super) fn draws(&self) -> Vec<ConfidenceBand> {
        self.draws.lock().expect("draw mutex poisoned").clone()
    }
}

impl ConfidenceSource for RecordingConfidence {
    fn draw(&self, band: ConfidenceBand) -> Result<u8, ConfidenceError> {
        self.draws.lock().expect("draw mutex poisoned").push(band);
        Ok(band.min)
    }
}

/// Always returns the same value, regardless of band.
pub(super) struct PinnedConfidence(pub(super) u8);

impl ConfidenceSource for PinnedConfidence {
    fn draw(&self, _band: ConfidenceBand) -> Result<u8, ConfidenceError> {
        Ok(self.0)
    }
}

pub(super) struct FailingConfidence;

impl ConfidenceSource for FailingConfidence {
    fn draw(&self, _band: ConfidenceBand) -> Result<u8, ConfidenceError> {
        Err(ConfidenceError::Unavailable("entropy pool offline".to_string()))
    }
}

pub(super) fn input(profile: &str, symptoms: &[&str], has_photos: bool) -> ScreeningInput {
    ScreeningInput::new(
        profile,
        symptoms.iter().map(|symptom| symptom.to_string()).collect(),
        has_photos,
    )
}

pub(super) fn symptoms(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

pub(super) fn build_service() -> (
    Arc<ScreeningService<RecordingConfidence>>,
    Arc<RecordingConfidence>,
) {
    let confidence = Arc::new(RecordingConfidence::default());
    let service = Arc::new(ScreeningService::new(confidence.clone()));
    (service, confidence)
}

pub(super) fn router_with_service<C>(service: Arc<ScreeningService<C>>) -> axum::Router
where
    C: ConfidenceSource + 'static,
{
    screening_router(service, &CorsConfig::default())
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
