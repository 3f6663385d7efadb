//! # DocVault Core
//!
//! Core types, errors, and utilities for the DocVault API.
//!
//! This crate provides foundational types used throughout the DocVault application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Limit/offset query parameters with defaulting rules
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use docvault_core::errors::AppError;
//! use docvault_core::pagination::PaginationParams;
//! use docvault_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found("User Not Found");
//! let hash = hash_password("secure_password")?;
//! let limit = PaginationParams::default().limit();
//! ```

pub mod errors;
pub mod pagination;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{Page, PaginationParams};
pub use password::{hash_password, verify_password};
