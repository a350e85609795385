use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::confidence::ConfidenceSource;
use super::identifier::timestamp;
use super::service::{AnalysisPayload, ScreeningError, ScreeningService, SimulationPayload};
use crate::config::{AllowedOrigin, CorsConfig};

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const SIMULATE_PATH: &str = "/api/simulate";

/// Router exposing the full analyzer and the simulation fallback.
///
/// `OPTIONS` requests are answered by the CORS layer with an empty 200 and never reach
/// a handler; any other method besides `POST` gets a JSON 405.
pub fn screening_router<C>(service: Arc<ScreeningService<C>>, cors: &CorsConfig) -> Router
where
    C: ConfidenceSource + 'static,
{
    Router::new()
        .route(
            ANALYZE_PATH,
            post(analyze_handler::<C>).fallback(method_not_allowed),
        )
        .route(
            SIMULATE_PATH,
            post(simulate_handler::<C>).fallback(method_not_allowed),
        )
        .layer(cors_layer(cors))
        .with_state(service)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = match &config.allow_origin {
        AllowedOrigin::Any => AllowOrigin::any(),
        AllowedOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

pub(crate) async fn analyze_handler<C>(
    State(service): State<Arc<ScreeningService<C>>>,
    payload: Result<Json<AnalysisPayload>, JsonRejection>,
) -> Response
where
    C: ConfidenceSource + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };

    match service.analyze(payload) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => screening_failure(err, "Erreur interne du serveur"),
    }
}

pub(crate) async fn simulate_handler<C>(
    State(service): State<Arc<ScreeningService<C>>>,
    payload: Result<Json<SimulationPayload>, JsonRejection>,
) -> Response
where
    C: ConfidenceSource + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };

    match service.simulate(payload) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => screening_failure(err, "Erreur de simulation"),
    }
}

pub(crate) async fn method_not_allowed() -> Response {
    let payload = json!({
        "error": "Method not allowed",
        "message": "Seules les requêtes POST sont acceptées",
    });
    (StatusCode::METHOD_NOT_ALLOWED, Json(payload)).into_response()
}

fn malformed_body(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": "Requête invalide",
        "message": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn screening_failure(err: ScreeningError, internal_label: &str) -> Response {
    match err {
        ScreeningError::IncompleteRequest => {
            let payload = json!({
                "error": "Données incomplètes",
                "message": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        ScreeningError::Confidence(_) => {
            let payload = json!({
                "error": internal_label,
                "message": err.to_string(),
                "timestamp": timestamp(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
