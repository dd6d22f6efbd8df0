use crate::schemas::ErrorResponse;
use axum::{http::StatusCode, response::Json};
use model::RepositoryError;
use tracing::{error, warn};

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Translate a repository failure into a status code and error body.
///
/// Caller mistakes are logged at `warn`; store failures at `error` and
/// reported to the client without details.
pub fn repository_error(err: RepositoryError) -> ApiError {
    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        error!("Repository failure: {}", err);
    }

    let (status, body) = match err {
        RepositoryError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("VALIDATION_ERROR", format!("Invalid request: {}", errors)),
        ),
        RepositoryError::HeroNotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("HERO_NOT_FOUND", format!("Hero with id {} does not exist", id)),
        ),
        RepositoryError::UnknownUser(id) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("INVALID_USER_ID", format!("User with id {} does not exist", id)),
        ),
        RepositoryError::DuplicateUserName(name) => (
            StatusCode::CONFLICT,
            ErrorResponse::new("USERNAME_ALREADY_EXISTS", format!("User name '{}' already exists", name)),
        ),
        RepositoryError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("DATABASE_ERROR", "Internal server error while accessing the database"),
        ),
        RepositoryError::PasswordHash(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("INTERNAL_ERROR", "Internal server error while processing credentials"),
        ),
    };

    (status, Json(body))
}
