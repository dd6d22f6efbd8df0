use crate::errors::{ApiError, repository_error};
use crate::schemas::{AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::user;
use model::{NewUser, UserRepository};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Request body for signing up
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// User name (unique, 1 to 100 characters)
    #[serde(alias = "UserName")]
    pub user_name: String,
    /// Password (1 to 100 characters), stored hashed
    #[serde(alias = "Password", alias = "Passsword", alias = "passsword")]
    pub password: String,
}

/// Request body for logging in
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(alias = "UserName")]
    pub user_name: String,
    #[serde(alias = "Password")]
    pub password: String,
}

/// User response model. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub user_name: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
        }
    }
}

/// Sign up a new user
#[utoipa::path(
    post,
    path = "/api/User/Create",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "User name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(user_name = %request.user_name))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering create_user function");
    debug!("Creating user with user name: {}", request.user_name);

    let repository = UserRepository::new(&state.db, state.password_hashing);
    let created = repository
        .create(NewUser {
            user_name: request.user_name,
            password: request.password,
        })
        .await
        .map_err(repository_error)?;

    info!("User {} signed up", created.id);
    Ok(Json(UserResponse::from(created)))
}

/// Log in with a user name and password
#[utoipa::path(
    post,
    path = "/api/User/Login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 404, description = "No user with these credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(user_name = %request.user_name))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering login function");

    let repository = UserRepository::new(&state.db, state.password_hashing);
    match repository
        .get_by_credentials(&request.user_name, &request.password)
        .await
        .map_err(repository_error)?
    {
        Some(found) => {
            info!("User {} logged in", found.id);
            Ok(Json(UserResponse::from(found)))
        }
        None => {
            warn!("Login failed for user name '{}'", request.user_name);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("INVALID_CREDENTIALS", "Invalid user name or password")),
            ))
        }
    }
}
