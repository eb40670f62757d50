use crate::db;
use crate::error::ApiError;
use crate::startup::AppState;
use crate::validation::{self, Record, RequiredFields};
use axum::{
    extract::{
        Extension, Json, Path,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCandidateRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "validation::deserialize_flag")]
    pub industry_connected: bool,
}

impl RequiredFields for CreateCandidateRequest {
    const REQUIRED: &'static [&'static str] = &["first_name", "last_name", "industry_connected"];
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCandidatePartyRequest {
    /// `null` removes the candidate from its party.
    pub party_id: Option<i64>,
}

impl RequiredFields for UpdateCandidatePartyRequest {
    const REQUIRED: &'static [&'static str] = &["party_id"];
}

/// All candidates with their party names
pub async fn list_candidates(
    Extension(app_state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let candidates = db::list_candidates(&app_state.db)
        .await
        .map_err(ApiError::database)?;

    Ok(Json(json!({
        "message": "success",
        "data": candidates
    })))
}

/// A single candidate; `data` is null when the id matches nothing
pub async fn get_candidate(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate_id = validation::path_id(path)?;

    let candidate = db::get_candidate(&app_state.db, candidate_id)
        .await
        .map_err(ApiError::rejected)?;

    Ok(Json(json!({
        "message": "success",
        "data": candidate
    })))
}

pub async fn create_candidate(
    Extension(app_state): Extension<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateCandidateRequest = validation::parse_record(body)?;

    let result = db::create_candidate(
        &app_state.db,
        &payload.first_name,
        &payload.last_name,
        payload.industry_connected,
    )
    .await
    .map_err(ApiError::rejected)?;

    info!(candidate_id = ?result.id, "candidate created");

    Ok(Json(json!({
        "message": "success",
        "data": payload,
        "id": result.id
    })))
}

/// Change a candidate's party affiliation
pub async fn update_candidate_party(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate_id = validation::path_id(path)?;
    let payload: UpdateCandidatePartyRequest = validation::parse_record(body)?;

    let result = db::update_candidate_party(&app_state.db, candidate_id, payload.party_id)
        .await
        .map_err(ApiError::rejected)?;

    debug!(candidate_id, changes = result.changes, "candidate party updated");

    Ok(Json(json!({
        "message": "success",
        "data": payload,
        "changes": result.changes
    })))
}

pub async fn delete_candidate(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate_id = validation::path_id(path)?;

    let result = db::delete_candidate(&app_state.db, candidate_id)
        .await
        .map_err(ApiError::rejected)?;

    debug!(candidate_id, changes = result.changes, "candidate deleted");

    Ok(Json(json!({
        "message": "successfully deleted",
        "changes": result.changes
    })))
}
