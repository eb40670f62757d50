use crate::db;
use crate::error::ApiError;
use crate::startup::AppState;
use crate::validation::{self, Record, RequiredFields};
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
pub struct CastVoteRequest {
    pub voter_id: i64,
    pub candidate_id: i64,
}

impl RequiredFields for CastVoteRequest {
    const REQUIRED: &'static [&'static str] = &["voter_id", "candidate_id"];
}

/// Record a vote. Unknown voter or candidate ids are refused by the
/// database's foreign keys and come back as a 400.
pub async fn cast_vote(
    Extension(app_state): Extension<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CastVoteRequest = validation::parse_record(body)?;

    let result = db::cast_vote(&app_state.db, payload.voter_id, payload.candidate_id)
        .await
        .map_err(ApiError::rejected)?;

    info!(
        vote_id = ?result.id,
        candidate_id = payload.candidate_id,
        "vote recorded"
    );

    Ok(Json(json!({
        "message": "success",
        "data": payload,
        "id": result.id
    })))
}

/// Leaderboard: candidates by vote count, highest first
pub async fn tally_votes(
    Extension(app_state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let tally = db::tally_votes(&app_state.db)
        .await
        .map_err(ApiError::database)?;

    Ok(Json(json!({
        "message": "success",
        "data": tally
    })))
}
