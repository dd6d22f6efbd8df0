use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

/// Error types for the repository layer
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(DbErr),

    /// Input rejected before reaching the database
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// No hero with the given id
    #[error("Hero {0} not found")]
    HeroNotFound(i32),

    /// A hero was given an owner that does not exist
    #[error("User {0} does not exist")]
    UnknownUser(i32),

    /// Unique constraint on `users.user_name`
    #[error("User name '{0}' already exists")]
    DuplicateUserName(String),

    /// Failure while hashing or verifying a password
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        error!(?err, "Database error");
        RepositoryError::Database(err)
    }
}

impl RepositoryError {
    /// Whether this error was caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RepositoryError::Validation(_)
                | RepositoryError::HeroNotFound(_)
                | RepositoryError::UnknownUser(_)
                | RepositoryError::DuplicateUserName(_)
        )
    }
}

/// Returns true when the database rejected a write because of a unique index.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Returns true when the database rejected a write because of a foreign key.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

/// Type alias for Result with RepositoryError
pub type Result<T> = std::result::Result<T, RepositoryError>;
