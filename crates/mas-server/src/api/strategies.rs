use axum::{
    extract::{Path, State},
    Extension, Json,
};
use mas_core::{Strategy, StrategyReport};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{
    map_pipeline_error, validate_run_request, ApiError, ApiResponse, AppState, ResponseMeta,
    RunRequest,
};

#[derive(Debug, Serialize)]
pub(super) struct StrategyItem {
    slug: &'static str,
    label: &'static str,
    title: &'static str,
}

impl From<Strategy> for StrategyItem {
    fn from(strategy: Strategy) -> Self {
        Self {
            slug: strategy.slug(),
            label: strategy.label(),
            title: strategy.title(),
        }
    }
}

pub(super) async fn list_strategies(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<StrategyItem>>> {
    Json(ApiResponse {
        data: Strategy::ALL.into_iter().map(StrategyItem::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn run_strategy(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
    Json(body): Json<RunRequest>,
) -> Result<Json<ApiResponse<StrategyReport>>, ApiError> {
    let strategy: Strategy = slug.parse().map_err(|_| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("unknown strategy: {slug}"),
        )
    })?;
    let (api_key, url) = validate_run_request(&req_id.0, &body)?;

    let report = state
        .pipeline
        .run_strategy(api_key, &url, strategy)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}
