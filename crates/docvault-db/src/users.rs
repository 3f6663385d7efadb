//! User persistence.

use async_trait::async_trait;
use sqlx::PgPool;

use docvault_core::{AppError, Page, PaginationParams};
use docvault_models::ids::UserId;
use docvault_models::users::{NewUser, User, UserChanges, UserCredentials};

use crate::errors::map_sqlx_error;

pub const USER_NOT_FOUND: &str = "User Not Found";

/// Storage port for user accounts.
///
/// Only [`find_by_email`](UserRepository::find_by_email) ever returns the
/// password hash; every other read yields the public [`User`] shape.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError>;
    async fn find_and_count_all(&self, params: PaginationParams) -> Result<Page<User>, AppError>;
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;
    /// Writes the present fields of `changes`. A missing row is `NotFound`.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, AppError>;
    /// Deletes the row. A missing row is `NotFound`.
    async fn destroy(&self, id: UserId) -> Result<(), AppError>;
}

/// PostgreSQL-backed [`UserRepository`].
#[derive(Clone, Debug)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT id, first_name, last_name, email, role_id, created_at, updated_at, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to fetch user by email"))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, role_id, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to fetch user by ID"))
    }

    async fn find_and_count_all(&self, params: PaginationParams) -> Result<Page<User>, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count users"))?;

        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, role_id, created_at, updated_at
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to fetch users"))?;

        Ok(Page::new(rows, count))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password, role_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, role_id, created_at, updated_at
            "#,
        )
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to insert user"))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = CASE WHEN $2 THEN $3 ELSE first_name END,
                last_name = CASE WHEN $4 THEN $5 ELSE last_name END,
                email = COALESCE($6, email),
                password = COALESCE($7, password),
                role_id = COALESCE($8, role_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, role_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.first_name.is_some())
        .bind(changes.first_name.flatten())
        .bind(changes.last_name.is_some())
        .bind(changes.last_name.flatten())
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(changes.role_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    async fn destroy(&self, id: UserId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete user"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        Ok(())
    }
}
