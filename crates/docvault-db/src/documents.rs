//! Document persistence. This API only reads documents, per owner.

use async_trait::async_trait;
use sqlx::PgPool;

use docvault_core::{AppError, Page, PaginationParams};
use docvault_models::documents::Document;
use docvault_models::ids::UserId;

use crate::errors::map_sqlx_error;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find_and_count_by_owner(
        &self,
        owner_id: UserId,
        params: PaginationParams,
    ) -> Result<Page<Document>, AppError>;
}

/// PostgreSQL-backed [`DocumentRepository`].
#[derive(Clone, Debug)]
pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn find_and_count_by_owner(
        &self,
        owner_id: UserId,
        params: PaginationParams,
    ) -> Result<Page<Document>, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count documents"))?;

        let rows = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, content, access, owner_id, created_at, updated_at
            FROM documents
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to fetch documents"))?;

        Ok(Page::new(rows, count))
    }
}
