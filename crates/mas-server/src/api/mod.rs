mod analysis;
mod strategies;
mod ui;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use mas_core::{ApiKey, MISSING_API_KEY_MESSAGE};
use mas_pipeline::{Pipeline, PipelineError};
use mas_scraper::ScraperError;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    model: String,
}

/// Body of every run request. Both fields are optional on the wire so a
/// missing key gets the friendly prompt instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RunRequest {
    pub api_key: Option<String>,
    pub url: Option<String>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "missing_api_key" | "validation_error" => StatusCode::BAD_REQUEST,
            "fetch_failed" | "completion_failed" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Validates a run request before any network traffic happens.
///
/// The key is checked first: without one nothing else matters.
pub(super) fn validate_run_request(
    request_id: &str,
    body: &RunRequest,
) -> Result<(ApiKey, String), ApiError> {
    let api_key = ApiKey::from_optional(body.api_key.as_deref())
        .map_err(|_| ApiError::new(request_id, "missing_api_key", MISSING_API_KEY_MESSAGE))?;

    let url = body.url.as_deref().map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(ApiError::new(
            request_id,
            "validation_error",
            "Please enter a website URL to analyze.",
        ));
    }

    Ok((api_key, url.to_string()))
}

pub(super) fn map_pipeline_error(request_id: String, error: &PipelineError) -> ApiError {
    if let PipelineError::Fetch(ScraperError::InvalidUrl { .. }) = error {
        return ApiError::new(request_id, "validation_error", error.user_message());
    }
    tracing::warn!(error = %error, code = error.code(), "run failed");
    ApiError::new(request_id, error.code(), error.user_message())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::strategy_page))
        .route("/analysis", get(ui::analysis_page))
        .route("/api/v1/health", get(health))
        .route("/api/v1/strategies", get(strategies::list_strategies))
        .route("/api/v1/strategies/{slug}", post(strategies::run_strategy))
        .route("/api/v1/analysis", post(analysis::run_analysis))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            model: state.pipeline.llm_settings().model.clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
