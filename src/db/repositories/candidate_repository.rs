use crate::db::connection::DbPool;
use crate::db::models::{Candidate, WriteResult};
use sqlx::Error;

const SELECT_CANDIDATE: &str = r#"
    SELECT candidates.id, candidates.first_name, candidates.last_name,
           candidates.industry_connected, candidates.party_id,
           parties.name AS party_name
    FROM candidates
    LEFT JOIN parties ON candidates.party_id = parties.id
"#;

pub async fn list_candidates(pool: &DbPool) -> Result<Vec<Candidate>, Error> {
    let rows = sqlx::query_as::<_, Candidate>(SELECT_CANDIDATE)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

pub async fn get_candidate(pool: &DbPool, candidate_id: i64) -> Result<Option<Candidate>, Error> {
    let sql = format!("{SELECT_CANDIDATE} WHERE candidates.id = ?");

    let row = sqlx::query_as::<_, Candidate>(&sql)
        .bind(candidate_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_candidate(
    pool: &DbPool,
    first_name: &str,
    last_name: &str,
    industry_connected: bool,
) -> Result<WriteResult, Error> {
    let result = sqlx::query(
        "INSERT INTO candidates (first_name, last_name, industry_connected) VALUES (?, ?, ?)",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(industry_connected)
    .execute(pool)
    .await?;

    Ok(WriteResult::inserted(result))
}

/// Change a candidate's party affiliation. `None` clears it.
pub async fn update_candidate_party(
    pool: &DbPool,
    candidate_id: i64,
    party_id: Option<i64>,
) -> Result<WriteResult, Error> {
    let result = sqlx::query("UPDATE candidates SET party_id = ? WHERE id = ?")
        .bind(party_id)
        .bind(candidate_id)
        .execute(pool)
        .await?;

    Ok(WriteResult::modified(result))
}

pub async fn delete_candidate(pool: &DbPool, candidate_id: i64) -> Result<WriteResult, Error> {
    let result = sqlx::query("DELETE FROM candidates WHERE id = ?")
        .bind(candidate_id)
        .execute(pool)
        .await?;

    Ok(WriteResult::modified(result))
}
