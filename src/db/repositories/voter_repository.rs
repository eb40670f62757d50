use crate::db::connection::DbPool;
use crate::db::models::{Voter, WriteResult};
use sqlx::Error;

pub async fn list_voters(pool: &DbPool) -> Result<Vec<Voter>, Error> {
    let rows = sqlx::query_as::<_, Voter>(
        "SELECT id, first_name, last_name, email FROM voters ORDER BY last_name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_voter(pool: &DbPool, voter_id: i64) -> Result<Option<Voter>, Error> {
    let row = sqlx::query_as::<_, Voter>(
        "SELECT id, first_name, last_name, email FROM voters WHERE id = ?",
    )
    .bind(voter_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn create_voter(
    pool: &DbPool,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<WriteResult, Error> {
    let result = sqlx::query("INSERT INTO voters (first_name, last_name, email) VALUES (?, ?, ?)")
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .execute(pool)
        .await?;

    Ok(WriteResult::inserted(result))
}

pub async fn update_voter_email(
    pool: &DbPool,
    voter_id: i64,
    email: &str,
) -> Result<WriteResult, Error> {
    let result = sqlx::query("UPDATE voters SET email = ? WHERE id = ?")
        .bind(email)
        .bind(voter_id)
        .execute(pool)
        .await?;

    Ok(WriteResult::modified(result))
}

pub async fn delete_voter(pool: &DbPool, voter_id: i64) -> Result<WriteResult, Error> {
    let result = sqlx::query("DELETE FROM voters WHERE id = ?")
        .bind(voter_id)
        .execute(pool)
        .await?;

    Ok(WriteResult::modified(result))
}
