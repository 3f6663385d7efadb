use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use docvault_auth::policy::LIST_USERS_DENIED;
use docvault_auth::{IdentityClaims, decode_token};
use docvault_config::JwtConfig;
use docvault_core::AppError;
use docvault_models::ids::UserId;

use crate::metrics::track_authorization_denied;

/// Extractor that validates the bearer token and provides the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub IdentityClaims);

impl AuthUser {
    pub fn user_id(&self) -> UserId {
        self.0.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin
    }

    pub fn claims(&self) -> &IdentityClaims {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let jwt_config = JwtConfig::from_ref(state);
        let claims = decode_token(token, &jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Transport-level admin gate. Authenticates like [`AuthUser`], then
/// rejects non-admin callers with 403.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_admin() {
            track_authorization_denied("list_users");
            return Err(AppError::forbidden(LIST_USERS_DENIED));
        }

        Ok(RequireAdmin(auth_user))
    }
}
