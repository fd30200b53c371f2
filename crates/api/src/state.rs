use std::sync::Arc;

use teamform_core::assignment::AssignmentEngine;
use teamform_db::formation_store::PgFormationStore;

use crate::config::ServerConfig;

/// The assignment engine wired to PostgreSQL.
pub type GroupEngine = AssignmentEngine<PgFormationStore>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: teamform_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Group assignment engine shared by the HTTP trigger and the scheduler.
    pub engine: Arc<GroupEngine>,
}

impl AppState {
    pub fn new(pool: teamform_db::DbPool, config: ServerConfig) -> Self {
        let engine = AssignmentEngine::new(
            PgFormationStore::new(pool.clone()),
            config.assignment.engine_settings(),
        );

        Self {
            pool,
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}
