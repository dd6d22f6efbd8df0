use crate::errors::{ApiError, repository_error};
use crate::schemas::{AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use model::entities::hero;
use model::{HeroUpdate, HeroesRepository, NewHero};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};

/// Request body for creating a hero
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeroRequest {
    /// Full name (1 to 100 characters)
    #[serde(alias = "FullName")]
    pub full_name: String,
    /// Owning user, if any
    #[serde(default, alias = "UserId")]
    pub user_id: Option<i32>,
}

/// Request body for renaming a hero
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHeroRequest {
    /// Hero to rename
    #[serde(default, alias = "Id")]
    pub id: Option<i32>,
    /// New full name (1 to 100 characters)
    #[serde(alias = "FullName")]
    pub full_name: String,
}

/// Query parameters for deleting a hero
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteHeroQuery {
    /// Hero ID
    #[serde(rename = "heroId")]
    pub hero_id: i32,
}

/// Hero response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponse {
    pub id: i32,
    pub full_name: String,
    pub user_id: Option<i32>,
}

impl From<hero::Model> for HeroResponse {
    fn from(model: hero::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            user_id: model.user_id,
        }
    }
}

/// Create a new hero
#[utoipa::path(
    post,
    path = "/api/Hero/Create",
    tag = "heroes",
    request_body = CreateHeroRequest,
    responses(
        (status = 200, description = "Hero created successfully", body = HeroResponse),
        (status = 400, description = "Invalid name or unknown owner", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_hero(
    State(state): State<AppState>,
    Json(request): Json<CreateHeroRequest>,
) -> Result<Json<HeroResponse>, ApiError> {
    trace!("Entering create_hero function");
    debug!("Creating hero '{}' for user {:?}", request.full_name, request.user_id);

    let repository = HeroesRepository::new(&state.db);
    let created = repository
        .create(NewHero {
            full_name: request.full_name,
            user_id: request.user_id,
        })
        .await
        .map_err(repository_error)?;

    info!("Hero {} created via API", created.id);
    Ok(Json(HeroResponse::from(created)))
}

/// Rename an existing hero
#[utoipa::path(
    put,
    path = "/api/Hero/Update",
    tag = "heroes",
    request_body = UpdateHeroRequest,
    responses(
        (status = 200, description = "Hero updated successfully", body = HeroResponse),
        (status = 400, description = "Missing id or invalid name", body = ErrorResponse),
        (status = 404, description = "Hero not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_hero(
    State(state): State<AppState>,
    Json(request): Json<UpdateHeroRequest>,
) -> Result<Json<HeroResponse>, ApiError> {
    trace!("Entering update_hero function");

    let Some(hero_id) = request.id else {
        warn!("Update request without a hero id");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("MISSING_HERO_ID", "The hero id is required to update a hero")),
        ));
    };

    debug!("Updating hero {} to '{}'", hero_id, request.full_name);
    let repository = HeroesRepository::new(&state.db);
    let updated = repository
        .update(HeroUpdate {
            id: hero_id,
            full_name: request.full_name,
        })
        .await
        .map_err(repository_error)?;

    info!("Hero {} renamed via API", updated.id);
    Ok(Json(HeroResponse::from(updated)))
}

/// List the heroes owned by a user
#[utoipa::path(
    get,
    path = "/api/Hero/GetByUser/{user_id}",
    tag = "heroes",
    params(
        ("user_id" = i32, Path, description = "Owner's user ID"),
    ),
    responses(
        (status = 200, description = "Heroes retrieved successfully", body = Vec<HeroResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_heroes_by_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroResponse>>, ApiError> {
    trace!("Entering get_heroes_by_user function for user_id: {}", user_id);

    let repository = HeroesRepository::new(&state.db);
    let heroes = repository.get_by_user(user_id).await.map_err(repository_error)?;

    info!("Successfully retrieved {} heroes for user {}", heroes.len(), user_id);
    Ok(Json(heroes.into_iter().map(HeroResponse::from).collect()))
}

/// Get a hero by ID. A missing hero yields a `null` body.
#[utoipa::path(
    get,
    path = "/api/Hero/GetById/{hero_id}",
    tag = "heroes",
    params(
        ("hero_id" = i32, Path, description = "Hero ID"),
    ),
    responses(
        (status = 200, description = "Hero retrieved, or null when absent", body = Option<HeroResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_hero_by_id(
    Path(hero_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<HeroResponse>>, ApiError> {
    trace!("Entering get_hero_by_id function for hero_id: {}", hero_id);

    let repository = HeroesRepository::new(&state.db);
    let hero = repository.get_by_id(hero_id).await.map_err(repository_error)?;
    if hero.is_none() {
        debug!("Hero with ID {} not found", hero_id);
    }

    Ok(Json(hero.map(HeroResponse::from)))
}

/// Delete a hero
#[utoipa::path(
    delete,
    path = "/api/Hero",
    tag = "heroes",
    params(DeleteHeroQuery),
    responses(
        (status = 200, description = "Hero deleted successfully"),
        (status = 400, description = "Missing or malformed hero id"),
        (status = 404, description = "Hero not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_hero(
    Query(query): Query<DeleteHeroQuery>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    trace!("Entering delete_hero function for hero_id: {}", query.hero_id);

    let repository = HeroesRepository::new(&state.db);
    repository.delete(query.hero_id).await.map_err(repository_error)?;

    info!("Hero {} deleted via API", query.hero_id);
    Ok(StatusCode::OK)
}
