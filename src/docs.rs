use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use docvault_core::PaginationParams;
use docvault_models::{
    AuthResponse, Document, DocumentsResponse, LoginRequest, MessageResponse, RegisterUserDto,
    UpdateUserDto, User, UsersResponse,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::retrieve_user,
        crate::modules::users::controller::retrieve_documents,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            User,
            RegisterUserDto,
            UpdateUserDto,
            UsersResponse,
            Document,
            DocumentsResponse,
            LoginRequest,
            AuthResponse,
            MessageResponse,
            ErrorResponse,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and logout"),
        (name = "Users", description = "User accounts and their documents")
    ),
    info(
        title = "DocVault API",
        version = "0.1.0",
        description = "User management and document access API with JWT session tokens.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
