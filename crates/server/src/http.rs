//! HTTP Endpoints
//!
//! REST API for the campus assistant.

use std::time::Instant;

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use campus_assistant_agent::ResponseFormat;
use campus_assistant_core::{Language, StudentId};
use campus_assistant_text_processing::{
    LanguageDetector, ScriptRatioDetector, ScriptStats, ThresholdDetector,
};

use crate::metrics::{record_chat_latency, record_request};
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        // Chat endpoint
        .route("/api/chat", post(chat))
        // Language detection diagnostic
        .route("/api/detect", post(detect_language))
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Prometheus metrics
        .route(
            "/metrics",
            get(move || async move {
                metrics_handle
                    .as_ref()
                    .map(|handle| handle.render())
                    .unwrap_or_default()
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        return CorsLayer::new();
    }

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Authenticated student id, resolved by the session layer upstream
    pub student_id: Option<StudentId>,
    pub message: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub format: ResponseFormat,
}

/// Handle one chat message
async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> impl IntoResponse {
    let started = Instant::now();

    let composed = state
        .composer
        .handle_message(request.student_id, &request.message)
        .await;

    record_chat_latency(started.elapsed().as_secs_f64());
    record_request("chat", "ok");

    Json(ChatResponse {
        response: composed.text,
        format: composed.format,
    })
}

/// Detection diagnostic request
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

/// Detection diagnostic response: both strategies plus raw script stats
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub text: String,
    pub detected_language: &'static str,
    pub threshold_language: &'static str,
    #[serde(flatten)]
    pub stats: ScriptStats,
    pub translated_text: String,
}

/// Report how both detection strategies read a text
async fn detect_language(Json(request): Json<DetectRequest>) -> impl IntoResponse {
    let dispatch = ScriptRatioDetector::new().detect(&request.text);
    let general = ThresholdDetector::new().detect(&request.text);
    let stats = ScriptStats::of(&request.text);

    // Exercise the normalization path the composer would take
    let translated_text = if dispatch != Language::English {
        campus_assistant_text_processing::normalize_to_english(&request.text, dispatch)
    } else {
        String::new()
    };

    record_request("detect", "ok");

    Json(DetectResponse {
        text: request.text,
        detected_language: dispatch.code(),
        threshold_language: general.code(),
        stats,
        translated_text,
    })
}

/// Liveness check
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Readiness check: datasets may be degraded, the service still serves
async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, "ready")
}
