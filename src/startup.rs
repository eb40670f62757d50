use crate::db::connection::DbPool;

/// Shared by every handler. The pool is the one database handle the
/// service owns; it is opened before the router is built.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        AppState { db }
    }
}
