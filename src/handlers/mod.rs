pub mod auth;
pub mod export;
pub mod report;

use crate::db::{DbPool, ReportStore, UserStore};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub report_store: ReportStore,
    pub user_store: UserStore,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            report_store: ReportStore::new(pool.clone()),
            user_store: UserStore::new(pool),
        }
    }
}
