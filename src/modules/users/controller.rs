use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::instrument;

use docvault_core::{AppError, PaginationParams};
use docvault_models::{
    AuthResponse, DocumentsResponse, MessageResponse, RegisterUserDto, UpdateUserDto, User,
    UserId, UsersResponse,
};

use super::service::{USER_DELETED, USER_UPDATED, UserService};
use crate::middleware::auth::{AuthUser, RequireAdmin};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn user_id(path: Result<Path<UserId>, PathRejection>) -> Result<UserId, AppError> {
    let Path(id) =
        path.map_err(|e| AppError::bad_request(format!("Invalid user id: {}", e.body_text())))?;
    Ok(id)
}

fn pagination(
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<PaginationParams, AppError> {
    let Query(params) = query
        .map_err(|e| AppError::bad_request(format!("Invalid query parameters: {}", e.body_text())))?;
    Ok(params)
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered and signed in", body = AuthResponse),
        (status = 400, description = "Validation error or email already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = UserService::register(state.users.as_ref(), dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = UsersResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<UsersResponse>, AppError> {
    let params = pagination(params)?;
    let page = UserService::list_users(state.users.as_ref(), auth_user.claims(), params).await?;
    Ok(Json(UsersResponse {
        users: page.rows,
        count: page.count,
    }))
}

/// Retrieve a user (self or admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn retrieve_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let id = user_id(id)?;
    let user = UserService::retrieve_user(state.users.as_ref(), auth_user.claims(), id).await?;
    Ok(Json(user))
}

/// List a user's documents (self or admin)
#[utoipa::path(
    get,
    path = "/api/users/{id}/documents",
    params(("id" = i64, Path, description = "Owner user ID"), PaginationParams),
    responses(
        (status = 200, description = "Page of the user's documents", body = DocumentsResponse),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn retrieve_documents(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<UserId>, PathRejection>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<DocumentsResponse>, AppError> {
    let id = user_id(id)?;
    let params = pagination(params)?;
    let page = UserService::retrieve_documents(
        state.users.as_ref(),
        state.documents.as_ref(),
        auth_user.claims(),
        id,
        params,
    )
    .await?;

    Ok(Json(DocumentsResponse {
        documents: page.rows,
        count: page.count,
    }))
}

/// Update a user (self or admin). Only fields present in the body are written.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Malformed user id, validation error or email already taken", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<UserId>, PathRejection>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = user_id(id)?;
    UserService::update_user(state.users.as_ref(), auth_user.claims(), id, dto).await?;
    Ok(Json(MessageResponse::new(USER_UPDATED)))
}

/// Delete a user (admin only; the default admin account is protected)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not an admin, or the protected account", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = user_id(id)?;
    UserService::delete_user(state.users.as_ref(), auth_user.claims(), id).await?;
    Ok(Json(MessageResponse::new(USER_DELETED)))
}
