//! User resource operations.
//!
//! Every targeted operation runs the same sequence: look the target up
//! (absent is 404), ask the policy (deny is 403), then act. The lookup
//! always comes first so a caller asking about an unknown id learns nothing about
//! its own permissions.

use tracing::{info, instrument};

use docvault_auth::policy::authorize_registration;
use docvault_auth::{Action, IdentityClaims, authorize, issue_token};
use docvault_config::JwtConfig;
use docvault_core::{AppError, Page, PaginationParams, hash_password};
use docvault_db::users::USER_NOT_FOUND;
use docvault_db::{DocumentRepository, UserRepository};
use docvault_models::{
    AuthResponse, Document, NewUser, RegisterUserDto, UpdateUserDto, User, UserChanges, UserId,
    roles,
};

use crate::metrics::{track_authorization_denied, track_jwt_issued, track_user_registered};

pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully.";

pub struct UserService;

impl UserService {
    /// Creates a regular account and signs the new user in.
    #[instrument(skip(users, dto, jwt_config), fields(email = %dto.email))]
    pub async fn register(
        users: &dyn UserRepository,
        dto: RegisterUserDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let email_taken = users.find_by_email(&dto.email).await?.is_some();
        authorize_registration(email_taken)?;

        let password_hash = hash_password(&dto.password)?;
        let user = users
            .create(NewUser {
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                password_hash,
                role_id: roles::REGULAR,
            })
            .await?;

        let token = issue_token(user.id, user.role_id, jwt_config)?;
        track_user_registered();
        track_jwt_issued();
        info!(user_id = %user.id, "User registered");

        Ok(AuthResponse { token, user })
    }

    #[instrument(skip(users, claims), fields(caller = %claims.user_id))]
    pub async fn list_users(
        users: &dyn UserRepository,
        claims: &IdentityClaims,
        params: PaginationParams,
    ) -> Result<Page<User>, AppError> {
        check(claims, Action::ListUsers)?;
        users.find_and_count_all(params).await
    }

    #[instrument(skip(users, claims), fields(caller = %claims.user_id))]
    pub async fn retrieve_user(
        users: &dyn UserRepository,
        claims: &IdentityClaims,
        id: UserId,
    ) -> Result<User, AppError> {
        let user = find_user(users, id).await?;
        check(claims, Action::ReadUser(id))?;
        Ok(user)
    }

    #[instrument(skip(users, documents, claims), fields(caller = %claims.user_id))]
    pub async fn retrieve_documents(
        users: &dyn UserRepository,
        documents: &dyn DocumentRepository,
        claims: &IdentityClaims,
        id: UserId,
        params: PaginationParams,
    ) -> Result<Page<Document>, AppError> {
        find_user(users, id).await?;
        check(claims, Action::ReadDocuments(id))?;
        documents.find_and_count_by_owner(id, params).await
    }

    /// Writes only the fields present in `dto`. A new password is hashed.
    /// An update with nothing to write leaves the row untouched.
    #[instrument(skip(users, claims, dto), fields(caller = %claims.user_id))]
    pub async fn update_user(
        users: &dyn UserRepository,
        claims: &IdentityClaims,
        id: UserId,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let current = find_user(users, id).await?;
        check(claims, Action::UpdateUser(id))?;

        let password_hash = match dto.password {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let changes = UserChanges {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password_hash,
            role_id: dto.role_id,
        };

        if changes.is_empty() {
            return Ok(current);
        }

        let user = users.update(id, changes).await?;
        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    #[instrument(skip(users, claims), fields(caller = %claims.user_id))]
    pub async fn delete_user(
        users: &dyn UserRepository,
        claims: &IdentityClaims,
        id: UserId,
    ) -> Result<(), AppError> {
        find_user(users, id).await?;
        check(claims, Action::DeleteUser(id))?;

        users.destroy(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}

async fn find_user(users: &dyn UserRepository, id: UserId) -> Result<User, AppError> {
    users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
}

fn check(claims: &IdentityClaims, action: Action) -> Result<(), AppError> {
    authorize(claims, action).inspect_err(|_| track_authorization_denied(action.name()))
}
