//! # DocVault Auth
//!
//! Identity claims, session tokens, and the authorization policy for the
//! DocVault API.
//!
//! This crate provides:
//!
//! - [`claims`]: [`IdentityClaims`], the trusted identity decoded from a bearer token
//! - [`jwt`]: Token issue and decode
//! - [`policy`]: Pure allow/deny decisions for every user-facing action
//!
//! # Example
//!
//! ```ignore
//! use docvault_auth::{Action, authorize, decode_token, issue_token};
//! use docvault_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(user.id, user.role_id, &config)?;
//!
//! let claims = decode_token(&token, &config)?;
//! authorize(&claims, Action::ReadUser(target_id))?;
//! ```

pub mod claims;
pub mod jwt;
pub mod policy;

// Re-export commonly used types at crate root
pub use claims::IdentityClaims;
pub use jwt::{TOKEN_VALIDITY_SECS, decode_token, issue_token};
pub use policy::{Action, authorize, authorize_registration};
