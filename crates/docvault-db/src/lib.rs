//! # DocVault DB
//!
//! Database pool, migrations, and repositories for the DocVault API.
//!
//! Services never touch SQL directly. They hold the repository traits
//! ([`UserRepository`], [`DocumentRepository`]) as `Arc<dyn ...>` so the
//! PostgreSQL implementations here can be swapped for in-memory ones in tests.
//!
//! # Example
//!
//! ```ignore
//! use docvault_db::{PgUserRepository, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserRepository::new(pool.clone());
//! ```

pub mod documents;
pub mod errors;
pub mod users;

use sqlx::postgres::PgPoolOptions;

pub use documents::{DocumentRepository, PgDocumentRepository};
pub use errors::map_sqlx_error;
pub use users::{PgUserRepository, UserRepository};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 10;

/// Connects a PostgreSQL pool to `database_url`.
///
/// The returned pool is cheaply cloneable; create it once at startup.
///
/// # Errors
///
/// Returns the connection error if the database is unreachable.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Applies any pending migrations from the workspace `migrations/` directory.
///
/// # Errors
///
/// Returns the migration error if a script fails or the history diverges.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
