use axum::{extract::State, Extension, Json};
use mas_core::AnalysisReport;

use crate::middleware::RequestId;

use super::{
    map_pipeline_error, validate_run_request, ApiError, ApiResponse, AppState, ResponseMeta,
    RunRequest,
};

pub(super) async fn run_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<RunRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, ApiError> {
    let (api_key, url) = validate_run_request(&req_id.0, &body)?;

    let report = state
        .pipeline
        .run_analysis(api_key, &url)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}
