use tracing::{instrument, warn};

use docvault_auth::issue_token;
use docvault_config::JwtConfig;
use docvault_core::{AppError, verify_password};
use docvault_db::UserRepository;
use docvault_models::{AuthResponse, LoginRequest};

use crate::metrics::{track_jwt_issued, track_login_failure, track_login_success};

pub const INVALID_LOGIN: &str = "Invalid Login Details!";
pub const LOGGED_OUT: &str = "Successfully logged out!";

pub struct AuthService;

impl AuthService {
    /// Verifies credentials and issues a one-day session token.
    ///
    /// An unknown email and a wrong password fail identically.
    #[instrument(skip(users, dto, jwt_config))]
    pub async fn login(
        users: &dyn UserRepository,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let Some(credentials) = users.find_by_email(&dto.email).await? else {
            track_login_failure("unknown_email");
            return Err(AppError::unauthorized(INVALID_LOGIN));
        };

        let is_valid = verify_password(&dto.password, &credentials.password).unwrap_or_else(|e| {
            warn!(user_id = %credentials.user.id, error = %e.error, "Stored password hash is unreadable");
            false
        });

        if !is_valid {
            track_login_failure("invalid_password");
            return Err(AppError::unauthorized(INVALID_LOGIN));
        }

        let user = credentials.user;
        let token = issue_token(user.id, user.role_id, jwt_config)?;
        track_jwt_issued();
        track_login_success(docvault_models::roles::is_admin_role(user.role_id));

        Ok(AuthResponse { token, user })
    }
}
