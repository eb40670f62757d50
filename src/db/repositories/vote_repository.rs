use crate::db::connection::DbPool;
use crate::db::models::{CandidateTally, WriteResult};
use sqlx::Error;

pub async fn cast_vote(pool: &DbPool, voter_id: i64, candidate_id: i64) -> Result<WriteResult, Error> {
    let result = sqlx::query("INSERT INTO votes (voter_id, candidate_id) VALUES (?, ?)")
        .bind(voter_id)
        .bind(candidate_id)
        .execute(pool)
        .await?;

    Ok(WriteResult::inserted(result))
}

/// Vote counts per candidate, highest first. Candidates nobody voted for
/// do not appear.
pub async fn tally_votes(pool: &DbPool) -> Result<Vec<CandidateTally>, Error> {
    let rows = sqlx::query_as::<_, CandidateTally>(
        r#"
        SELECT candidates.id, candidates.first_name, candidates.last_name,
               candidates.industry_connected, candidates.party_id,
               parties.name AS party_name,
               COUNT(votes.candidate_id) AS count
        FROM votes
        LEFT JOIN candidates ON votes.candidate_id = candidates.id
        LEFT JOIN parties ON candidates.party_id = parties.id
        GROUP BY votes.candidate_id
        ORDER BY count DESC, candidates.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
