//! # DocVault Models
//!
//! Domain models and DTOs for the DocVault API.
//!
//! # Modules
//!
//! - [`auth`]: Login request and token responses
//! - [`documents`]: Documents listed per owner
//! - [`ids`]: Strongly-typed ID newtypes
//! - [`users`]: User accounts, registration/update DTOs, and well-known roles
//!
//! # Example
//!
//! ```ignore
//! use docvault_models::users::{User, roles};
//!
//! if roles::is_protected_account(user.id) {
//!     println!("This is the default admin account");
//! }
//! ```

pub mod auth;
pub mod documents;
pub mod ids;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthResponse, LoginRequest, MessageResponse};
pub use documents::{Document, DocumentsResponse};
pub use ids::{DocumentId, RoleId, UserId};
pub use users::{
    EMAIL_TAKEN_MESSAGE, NewUser, RegisterUserDto, UpdateUserDto, User, UserChanges,
    UserCredentials, UsersResponse, roles,
};
