use crate::handlers::heroes::{CreateHeroRequest, DeleteHeroQuery, HeroResponse, UpdateHeroRequest};
use crate::handlers::users::{CreateUserRequest, LoginRequest, UserResponse};
use model::PasswordHashing;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool; handlers borrow it for one request at a time
    pub db: DatabaseConnection,
    /// Argon2 parameters for newly registered passwords
    pub password_hashing: PasswordHashing,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::heroes::create_hero,
        crate::handlers::heroes::update_hero,
        crate::handlers::heroes::get_heroes_by_user,
        crate::handlers::heroes::get_hero_by_id,
        crate::handlers::heroes::delete_hero,
        crate::handlers::users::create_user,
        crate::handlers::users::login,
        crate::handlers::home::get_values,
        crate::handlers::home::get_value,
        crate::handlers::home::post_value,
        crate::handlers::home::put_value,
        crate::handlers::home::delete_value,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            CreateHeroRequest,
            UpdateHeroRequest,
            DeleteHeroQuery,
            HeroResponse,
            CreateUserRequest,
            LoginRequest,
            UserResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "heroes", description = "Hero management endpoints"),
        (name = "users", description = "Sign-up and login endpoints"),
        (name = "home", description = "Placeholder endpoints"),
    ),
    info(
        title = "Tour of Heroes API",
        description = "Heroes and their owners, backed by a relational database",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
