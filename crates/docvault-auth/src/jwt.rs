//! Session token issue and decode.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`] and valid for
//! exactly one day. There is no server-side revocation: a token stays valid
//! until it expires, logout included.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use docvault_config::JwtConfig;
use docvault_core::AppError;
use docvault_models::ids::{RoleId, UserId};

use crate::claims::IdentityClaims;

/// Lifetime of every session token: one day.
pub const TOKEN_VALIDITY_SECS: usize = 24 * 60 * 60;

/// Issues a session token for the given account.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(
    user_id: UserId,
    role_id: RoleId,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let claims = IdentityClaims::new(user_id, role_id, now, now + TOKEN_VALIDITY_SECS);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Decodes a bearer token into [`IdentityClaims`].
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, carries a bad
/// signature, or has expired.
pub fn decode_token(token: &str, jwt_config: &JwtConfig) -> Result<IdentityClaims, AppError> {
    decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
