use std::sync::Arc;

use axum::extract::FromRef;

use docvault_config::{CorsConfig, JwtConfig};
use docvault_db::{DocumentRepository, PgDocumentRepository, PgPool, PgUserRepository, UserRepository};

/// Shared per-process state. Cloned into every request.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub documents: Arc<dyn DocumentRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        documents: Arc<dyn DocumentRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            documents,
            jwt_config,
            cors_config,
        }
    }

    /// State backed by PostgreSQL, with configuration read from the environment.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgDocumentRepository::new(pool)),
            JwtConfig::from_env(),
            CorsConfig::from_env(),
        )
    }
}
