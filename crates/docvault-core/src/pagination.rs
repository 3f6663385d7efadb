//! Pagination utilities for list endpoints.
//!
//! List endpoints accept `limit` and `offset` query parameters:
//!
//! - `limit`: defaults to 10 when absent, empty, non-numeric, or not positive
//! - `offset`: defaults to 0 when absent, empty, non-numeric, or not positive
//!
//! There is no upper clamp on `limit`; a caller asking for 25 gets 25.
//!
//! # Example
//!
//! ```ignore
//! use docvault_core::pagination::PaginationParams;
//!
//! // GET /api/users?limit=0&offset=-5
//! let params = PaginationParams { limit: Some(0), offset: Some(-5) };
//! assert_eq!(params.limit(), 10);
//! assert_eq!(params.offset(), 0);
//! ```

use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Deserializes an optional string into an optional i64.
///
/// Empty and non-numeric values become `None`, so a malformed parameter
/// falls back to its default instead of rejecting the request.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<i64>().ok()))
}

/// Query parameters for limit/offset pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Maximum number of items to return (default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Returns the effective limit.
    #[must_use]
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Returns the effective offset.
    #[must_use]
    pub fn offset(&self) -> i64 {
        match self.offset {
            Some(offset) if offset > 0 => offset,
            _ => DEFAULT_OFFSET,
        }
    }
}

/// A page of rows together with the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub count: i64,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, count: i64) -> Self {
        Self { rows, count }
    }
}
