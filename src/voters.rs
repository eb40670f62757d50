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
pub struct RegisterVoterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RequiredFields for RegisterVoterRequest {
    const REQUIRED: &'static [&'static str] = &["first_name", "last_name", "email"];
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateEmailRequest {
    pub email: String,
}

impl RequiredFields for UpdateEmailRequest {
    const REQUIRED: &'static [&'static str] = &["email"];
}

/// All voters, sorted by last name
pub async fn list_voters(
    Extension(app_state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let voters = db::list_voters(&app_state.db)
        .await
        .map_err(ApiError::database)?;

    Ok(Json(json!({
        "message": "success",
        "data": voters
    })))
}

pub async fn get_voter(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let voter_id = validation::path_id(path)?;

    let voter = db::get_voter(&app_state.db, voter_id)
        .await
        .map_err(ApiError::rejected)?;

    Ok(Json(json!({
        "message": "success",
        "data": voter
    })))
}

pub async fn register_voter(
    Extension(app_state): Extension<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: RegisterVoterRequest = validation::parse_record(body)?;

    let result = db::create_voter(
        &app_state.db,
        &payload.first_name,
        &payload.last_name,
        &payload.email,
    )
    .await
    .map_err(ApiError::rejected)?;

    info!(voter_id = ?result.id, "voter registered");

    Ok(Json(json!({
        "message": "success",
        "data": payload,
        "id": result.id
    })))
}

pub async fn update_voter_email(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let voter_id = validation::path_id(path)?;
    let payload: UpdateEmailRequest = validation::parse_record(body)?;

    let result = db::update_voter_email(&app_state.db, voter_id, &payload.email)
        .await
        .map_err(ApiError::rejected)?;

    Ok(Json(json!({
        "message": "success",
        "data": payload,
        "changes": result.changes
    })))
}

pub async fn delete_voter(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let voter_id = validation::path_id(path)?;

    let result = db::delete_voter(&app_state.db, voter_id)
        .await
        .map_err(ApiError::rejected)?;

    debug!(voter_id, changes = result.changes, "voter deleted");

    Ok(Json(json!({
        "message": "deleted",
        "changes": result.changes
    })))
}
