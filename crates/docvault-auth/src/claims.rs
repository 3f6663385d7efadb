//! JWT claim structure for session tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use docvault_models::ids::{RoleId, UserId};
use docvault_models::roles;

/// The decoded, trusted identity asserted for a request.
///
/// Claims are produced once per authenticated request and trusted as-is for
/// its duration. `is_admin` reflects the caller's role when the token was
/// issued and stays stale until the caller logs in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaims {
    /// Caller's user ID
    pub user_id: UserId,
    /// Caller's role at issue time
    pub role_id: RoleId,
    /// Admin capability, derived from `role_id` at issue time
    pub is_admin: bool,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl IdentityClaims {
    pub fn new(user_id: UserId, role_id: RoleId, iat: usize, exp: usize) -> Self {
        Self {
            user_id,
            role_id,
            is_admin: roles::is_admin_role(role_id),
            exp,
            iat,
        }
    }
}
