//! Authorization policy.
//!
//! Pure, side-effect-free decisions over [`IdentityClaims`] and a target
//! user ID. Every user-facing operation goes through exactly one predicate
//! here, either directly or via [`authorize`].
//!
//! # Ordering contract
//!
//! Callers must check that the target exists *before* asking the policy, so
//! that asking about a nonexistent ID yields 404 and never reveals whether the
//! caller would have been allowed. For deletes, the protected-account check
//! is part of the policy decision and runs after the existence check.
//!
//! | Action | Allowed when |
//! |--------|--------------|
//! | [`Action::ListUsers`] | caller is admin |
//! | [`Action::ReadUser`] | caller is admin or the target |
//! | [`Action::ReadDocuments`] | caller is admin or the target |
//! | [`Action::UpdateUser`] | caller is admin or the target |
//! | [`Action::DeleteUser`] | caller is admin and the target is not the protected account |

use docvault_core::AppError;
use docvault_models::ids::UserId;
use docvault_models::{EMAIL_TAKEN_MESSAGE, roles};

use crate::claims::IdentityClaims;

pub const LIST_USERS_DENIED: &str = "Admin access required";
pub const READ_USER_DENIED: &str = "You can only retrieve your information!";
pub const READ_DOCUMENTS_DENIED: &str = "You are not authorized to access this document(s)";
pub const UPDATE_USER_DENIED: &str = "You are not authorized to update this user";
pub const DELETE_USER_DENIED: &str = "Only an admin can delete users";
pub const DELETE_PROTECTED_DENIED: &str = "You cannot delete default admin user account!";

/// An operation a caller wants to perform, with its target where it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListUsers,
    ReadUser(UserId),
    ReadDocuments(UserId),
    UpdateUser(UserId),
    DeleteUser(UserId),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ListUsers => "list_users",
            Action::ReadUser(_) => "read_user",
            Action::ReadDocuments(_) => "read_documents",
            Action::UpdateUser(_) => "update_user",
            Action::DeleteUser(_) => "delete_user",
        }
    }
}

pub fn is_self(claims: &IdentityClaims, target: UserId) -> bool {
    claims.user_id == target
}

pub fn can_read_user(claims: &IdentityClaims, target: UserId) -> bool {
    claims.is_admin || is_self(claims, target)
}

pub fn can_list_all_users(claims: &IdentityClaims) -> bool {
    claims.is_admin
}

pub fn can_read_documents_of(claims: &IdentityClaims, target: UserId) -> bool {
    can_read_user(claims, target)
}

pub fn can_update_user(claims: &IdentityClaims, target: UserId) -> bool {
    can_read_user(claims, target)
}

/// The protected account is never deletable, whoever asks.
pub fn can_delete_user(claims: &IdentityClaims, target: UserId) -> bool {
    claims.is_admin && !roles::is_protected_account(target)
}

pub fn can_register(email_taken: bool) -> bool {
    !email_taken
}

/// Checks `action` against the policy and returns the refusal on deny.
///
/// # Errors
///
/// Returns a forbidden error carrying the action-specific message.
pub fn authorize(claims: &IdentityClaims, action: Action) -> Result<(), AppError> {
    let allowed = match action {
        Action::ListUsers => can_list_all_users(claims),
        Action::ReadUser(target) => can_read_user(claims, target),
        Action::ReadDocuments(target) => can_read_documents_of(claims, target),
        Action::UpdateUser(target) => can_update_user(claims, target),
        Action::DeleteUser(target) => {
            if roles::is_protected_account(target) {
                return Err(AppError::forbidden(DELETE_PROTECTED_DENIED));
            }
            can_delete_user(claims, target)
        }
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::forbidden(denial_message(action)))
    }
}

fn denial_message(action: Action) -> &'static str {
    match action {
        Action::ListUsers => LIST_USERS_DENIED,
        Action::ReadUser(_) => READ_USER_DENIED,
        Action::ReadDocuments(_) => READ_DOCUMENTS_DENIED,
        Action::UpdateUser(_) => UPDATE_USER_DENIED,
        Action::DeleteUser(_) => DELETE_USER_DENIED,
    }
}

/// Checks that a registration may proceed.
///
/// # Errors
///
/// Returns a conflict error when the email is already taken.
pub fn authorize_registration(email_taken: bool) -> Result<(), AppError> {
    if can_register(email_taken) {
        Ok(())
    } else {
        Err(AppError::conflict(EMAIL_TAKEN_MESSAGE))
    }
}
