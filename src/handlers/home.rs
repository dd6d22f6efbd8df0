//! Placeholder endpoints carried over from the web API project template.
//! None of them touch the database.

use axum::{extract::Path, http::StatusCode, response::Json};
use tracing::{debug, instrument};

/// List placeholder values
#[utoipa::path(
    get,
    path = "/api/Home",
    tag = "home",
    responses(
        (status = 200, description = "Placeholder values", body = Vec<String>)
    )
)]
#[instrument]
pub async fn get_values() -> Json<Vec<String>> {
    Json(vec!["value1".to_string(), "value2".to_string()])
}

/// Get a placeholder value
#[utoipa::path(
    get,
    path = "/api/Home/{id}",
    tag = "home",
    params(
        ("id" = i32, Path, description = "Ignored identifier"),
    ),
    responses(
        (status = 200, description = "Placeholder value", body = String)
    )
)]
#[instrument]
pub async fn get_value(Path(id): Path<i32>) -> Json<String> {
    Json("value".to_string())
}

/// Accept a value and discard it
#[utoipa::path(
    post,
    path = "/api/Home",
    tag = "home",
    request_body = String,
    responses(
        (status = 200, description = "Accepted")
    )
)]
#[instrument]
pub async fn post_value(Json(value): Json<String>) -> StatusCode {
    debug!("Discarding posted value");
    StatusCode::OK
}

/// Accept a replacement value and discard it
#[utoipa::path(
    put,
    path = "/api/Home/{id}",
    tag = "home",
    params(
        ("id" = i32, Path, description = "Ignored identifier"),
    ),
    request_body = String,
    responses(
        (status = 200, description = "Accepted")
    )
)]
#[instrument]
pub async fn put_value(Path(id): Path<i32>, Json(value): Json<String>) -> StatusCode {
    debug!("Discarding value for id {}", id);
    StatusCode::OK
}

/// Accept a deletion and do nothing
#[utoipa::path(
    delete,
    path = "/api/Home/{id}",
    tag = "home",
    params(
        ("id" = i32, Path, description = "Ignored identifier"),
    ),
    responses(
        (status = 200, description = "Accepted")
    )
)]
#[instrument]
pub async fn delete_value(Path(id): Path<i32>) -> StatusCode {
    debug!("Ignoring delete for id {}", id);
    StatusCode::OK
}
