//! User domain models and DTOs.
//!
//! [`User`] is the public shape of an account and never carries the
//! password hash. [`UserCredentials`] pairs it with the stored hash and is
//! only used internally for credential verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{RoleId, UserId};

/// Returned whenever an email collides with an existing account, whether the
/// pre-check or the unique constraint catches it.
pub const EMAIL_TAKEN_MESSAGE: &str = "Oops! A user already exists with this email";

/// Well-known role and account identifiers (must match migrations).
pub mod roles {
    use crate::ids::{RoleId, UserId};

    /// Administrator role. Assigned out-of-band, never through registration.
    pub const ADMIN: RoleId = RoleId(1);
    /// Ordinary user role. Every self-registered account gets this role.
    pub const REGULAR: RoleId = RoleId(2);

    /// The default admin account. It can never be deleted, not even by another admin.
    pub const PROTECTED_ADMIN_ID: UserId = UserId(1);

    pub fn is_admin_role(role_id: RoleId) -> bool {
        role_id == ADMIN
    }

    pub fn is_protected_account(user_id: UserId) -> bool {
        user_id == PROTECTED_ADMIN_ID
    }
}

/// A user account as returned by the API.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub role_id: RoleId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with the stored password hash.
#[derive(FromRow, Debug, Clone)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

/// Fields for a new account, with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role_id: RoleId,
}

/// The set of columns an update writes. `None` means "leave unchanged".
///
/// The nullable name columns carry a second level: `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role_id: Option<RoleId>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.role_id.is_none()
    }
}

/// Self-registration payload.
///
/// Any `role_id` in the request body is ignored; registered accounts always
/// get [`roles::REGULAR`].
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct RegisterUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Keeps a present `null` as `Some(None)`; an absent field stays `None`
/// through `#[serde(default)]`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update payload. Only fields present in the body are written.
///
/// `first_name` and `last_name` may be sent as `null` to clear them. The
/// remaining columns are not nullable, so a `null` there is treated as absent.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>)]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>)]
    pub last_name: Option<Option<String>>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: Option<String>,
    pub role_id: Option<RoleId>,
}

/// Response body for the user listing.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: i64,
}
