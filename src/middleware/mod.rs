//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`]: any valid bearer token; yields the caller's
//!   [`IdentityClaims`](docvault_auth::IdentityClaims)
//! - [`auth::RequireAdmin`]: a valid token whose claims carry `is_admin`
//!
//! Extractors only establish *who* is calling. Per-resource decisions
//! (self vs. admin, the protected account) are made by the services through
//! `docvault_auth::policy`, after the target has been looked up.

pub mod auth;
