use serde::Serialize;
use sqlx::sqlite::SqliteQueryResult;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Candidate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: bool,
    pub party_id: Option<i64>,
    pub party_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Voter {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One leaderboard row: the candidate with its party plus the vote count.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CandidateTally {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub candidate: Candidate,
    pub count: i64,
}

/// Metadata of a write statement: the generated row id for inserts and the
/// number of rows the statement actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteResult {
    pub id: Option<i64>,
    pub changes: u64,
}

impl WriteResult {
    pub fn inserted(result: SqliteQueryResult) -> Self {
        WriteResult {
            id: Some(result.last_insert_rowid()),
            changes: result.rows_affected(),
        }
    }

    pub fn modified(result: SqliteQueryResult) -> Self {
        WriteResult {
            id: None,
            changes: result.rows_affected(),
        }
    }
}
