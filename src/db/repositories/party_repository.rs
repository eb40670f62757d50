use crate::db::connection::DbPool;
use crate::db::models::{Party, WriteResult};
use sqlx::Error;

pub async fn list_parties(pool: &DbPool) -> Result<Vec<Party>, Error> {
    let rows = sqlx::query_as::<_, Party>("SELECT id, name, description FROM parties")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

pub async fn get_party(pool: &DbPool, party_id: i64) -> Result<Option<Party>, Error> {
    let row = sqlx::query_as::<_, Party>("SELECT id, name, description FROM parties WHERE id = ?")
        .bind(party_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_party(
    pool: &DbPool,
    name: &str,
    description: Option<&str>,
) -> Result<WriteResult, Error> {
    let result = sqlx::query("INSERT INTO parties (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;

    Ok(WriteResult::inserted(result))
}

pub async fn delete_party(pool: &DbPool, party_id: i64) -> Result<WriteResult, Error> {
    let result = sqlx::query("DELETE FROM parties WHERE id = ?")
        .bind(party_id)
        .execute(pool)
        .await?;

    Ok(WriteResult::modified(result))
}
