use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::PlatformModel;
use crate::response::ApiResponse;
use crate::services::cache::CacheService;
use crate::services::platform::PlatformService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

const CACHE_KEY: &str = "catalog:platforms";
const CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlatformRequest {
    /// Platform name (e.g. a social network)
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/platforms",
    responses(
        (status = 200, description = "All platforms ordered by name", body = Vec<PlatformModel>),
    ),
    tag = "catalog"
)]
pub async fn list_platforms(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
) -> AppResult<impl IntoResponse> {
    if let Some(Extension(cache)) = &cache {
        if let Some(cached) = cache.get::<Vec<PlatformModel>>(CACHE_KEY).await {
            return Ok(ApiResponse::ok(cached));
        }
    }

    let service = PlatformService::new(db);
    let platforms = service.list().await?;

    if let Some(Extension(cache)) = &cache {
        cache.set(CACHE_KEY, &platforms, CACHE_TTL_SECS).await;
    }

    Ok(ApiResponse::ok(platforms))
}

#[utoipa::path(
    get,
    path = "/api/v1/platforms/{id}",
    params(("id" = i32, Path, description = "Platform ID")),
    responses(
        (status = 200, description = "Platform detail", body = PlatformModel),
        (status = 404, description = "Platform not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn get_platform(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = PlatformService::new(db);
    let platform = service.get_by_id(id).await?;
    Ok(ApiResponse::ok(platform))
}

#[utoipa::path(
    post,
    path = "/api/v1/platforms",
    security(("jwt_token" = [])),
    request_body = PlatformRequest,
    responses(
        (status = 200, description = "Platform created", body = PlatformModel),
    ),
    tag = "catalog"
)]
pub async fn create_platform(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Json(payload): Json<PlatformRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = PlatformService::new(db);
    let platform = service
        .create(&payload.name, &payload.url, &payload.icon)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(platform))
}

#[utoipa::path(
    put,
    path = "/api/v1/platforms/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Platform ID")),
    request_body = PlatformRequest,
    responses(
        (status = 200, description = "Platform updated", body = PlatformModel),
        (status = 404, description = "Platform not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn update_platform(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PlatformRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = PlatformService::new(db);
    let platform = service
        .update(id, &payload.name, &payload.url, &payload.icon)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(platform))
}

#[utoipa::path(
    delete,
    path = "/api/v1/platforms/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Platform ID")),
    responses(
        (status = 200, description = "Platform deleted", body = String),
        (status = 404, description = "Platform not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn delete_platform(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = PlatformService::new(db);
    service.delete(id).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok("Platform deleted"))
}
