use crate::handlers::{
    health::health_check,
    heroes::{create_hero, delete_hero, get_hero_by_id, get_heroes_by_user, update_hero},
    home::{delete_value, get_value, get_values, post_value, put_value},
    users::{create_user, login},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Hero routes
        .route("/api/Hero/Create", post(create_hero))
        .route("/api/Hero/Update", put(update_hero))
        .route("/api/Hero/GetByUser/:user_id", get(get_heroes_by_user))
        .route("/api/Hero/GetById/:hero_id", get(get_hero_by_id))
        .route("/api/Hero", delete(delete_hero))
        // User routes
        .route("/api/User/Create", post(create_user))
        .route("/api/User/Login", post(login))
        // Placeholder routes
        .route("/api/Home", get(get_values).post(post_value))
        .route("/api/Home/:id", get(get_value).put(put_value).delete(delete_value))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
