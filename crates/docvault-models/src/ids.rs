//! Strongly-typed ID newtypes for domain entities.
//!
//! Each entity gets its own wrapper around the database key so a
//! `DocumentId` can never be passed where a `UserId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use docvault_models::ids::{DocumentId, UserId};
//!
//! fn get_user(id: UserId) { /* ... */ }
//!
//! get_user(UserId::new(5));      // OK
//! // get_user(DocumentId::new(5)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Macro to define a strongly-typed integer ID newtype.
///
/// Generates a transparent wrapper that binds and decodes as the inner
/// integer in SQL, serializes as a bare number, and parses from path
/// segments such as `/users/5`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ident)
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
            ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = $inner)]
        pub struct $name(pub $inner);

        impl $name {
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

define_id!(
    /// Primary key of a user account.
    UserId(i64)
);

define_id!(
    /// Primary key of a role.
    RoleId(i32)
);

define_id!(
    /// Primary key of a document.
    DocumentId(i64)
);
