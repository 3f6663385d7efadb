//! Translation of datastore failures into [`AppError`].

use docvault_core::AppError;
use docvault_models::EMAIL_TAKEN_MESSAGE;
use sqlx::error::ErrorKind;

/// Maps a sqlx error to the API error taxonomy.
///
/// A unique-constraint violation becomes a conflict carrying the duplicate
/// email message, since `users.email` is the only unique column a request can
/// write. Other constraint violations are the caller's fault and become 400.
/// Everything else is a 500 with `context` attached for the logs.
pub fn map_sqlx_error(err: sqlx::Error, context: &'static str) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return AppError::conflict(EMAIL_TAKEN_MESSAGE),
            ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                return AppError::bad_request(db_err.message().to_string());
            }
            _ => {}
        }
    }

    AppError::database(anyhow::Error::new(err).context(context))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound, "Failed to fetch user");
        assert!(err.status.is_server_error());
        assert_eq!(err.public_message(), "Internal server error");
        assert!(format!("{:?}", err.error).contains("Failed to fetch user"));
    }

    #[test]
    fn test_pool_timeout_is_internal() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut, "Failed to list users");
        assert_eq!(err.status.as_u16(), 500);
    }
}
