//! Handlers for `/releases` and `/analysis`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use radar_core::validate::ReleaseDraft;

use crate::api::dto::{AnalysisResponse, ReleaseResponse};
use crate::app_state::AppState;
use crate::error::{ApiError, ApiResult};

fn observed(state: &AppState, err: impl Into<ApiError>) -> ApiError {
    let err = err.into();
    state.record_error(&err.0);
    err
}

pub async fn create_release(
    State(state): State<AppState>,
    payload: Result<Json<ReleaseDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ReleaseResponse>)> {
    let Json(draft) = payload.map_err(|e| observed(&state, e))?;
    let release = state
        .create_release(draft)
        .await
        .map_err(|e| observed(&state, e))?;
    Ok((StatusCode::CREATED, Json(release.into())))
}

pub async fn list_releases(State(state): State<AppState>) -> Json<Vec<ReleaseResponse>> {
    let releases = state.list_releases().await;
    Json(releases.into_iter().map(ReleaseResponse::from).collect())
}

pub async fn get_release(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> ApiResult<Json<ReleaseResponse>> {
    let release = state
        .get_release(&version)
        .await
        .map_err(|e| observed(&state, e))?;
    Ok(Json(release.into()))
}

pub async fn delete_release(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .delete_release(&version)
        .await
        .map_err(|e| observed(&state, e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn analyze_release(
    State(state): State<AppState>,
    Path(version): Path<String>,
) -> ApiResult<Json<AnalysisResponse>> {
    let analysis = state
        .analyze(&version)
        .await
        .map_err(|e| observed(&state, e))?;
    Ok(Json(analysis.into()))
}
