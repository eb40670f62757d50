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
pub struct CreatePartyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RequiredFields for CreatePartyRequest {
    const REQUIRED: &'static [&'static str] = &["name"];
}

pub async fn list_parties(
    Extension(app_state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let parties = db::list_parties(&app_state.db)
        .await
        .map_err(ApiError::database)?;

    Ok(Json(json!({
        "message": "success",
        "data": parties
    })))
}

pub async fn get_party(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let party_id = validation::path_id(path)?;

    let party = db::get_party(&app_state.db, party_id)
        .await
        .map_err(ApiError::rejected)?;

    Ok(Json(json!({
        "message": "success",
        "data": party
    })))
}

pub async fn create_party(
    Extension(app_state): Extension<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreatePartyRequest = validation::parse_record(body)?;

    let result = db::create_party(&app_state.db, &payload.name, payload.description.as_deref())
        .await
        .map_err(ApiError::rejected)?;

    info!(party_id = ?result.id, "party created");

    Ok(Json(json!({
        "message": "success",
        "data": payload,
        "id": result.id
    })))
}

/// Candidates of a deleted party keep existing with their `party_id` cleared.
pub async fn delete_party(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let party_id = validation::path_id(path)?;

    let result = db::delete_party(&app_state.db, party_id)
        .await
        .map_err(ApiError::rejected)?;

    Ok(Json(json!({
        "message": "deleted",
        "changes": result.changes
    })))
}
