//! Document models.
//!
//! Documents are owned by the wider document service; this API only lists
//! them per owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{DocumentId, UserId};

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    /// Visibility of the document: `public`, `private` or `role`.
    pub access: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for a user's documents.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct DocumentsResponse {
    pub documents: Vec<Document>,
    pub count: i64,
}
