use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::CountryModel;
use crate::response::ApiResponse;
use crate::services::cache::CacheService;
use crate::services::country::CountryService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

const CACHE_KEY: &str = "catalog:countries";
const CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CountryRequest {
    /// Country name (unique)
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub local_name: String,
    /// Country code (unique)
    #[validate(length(min = 1, max = 10))]
    pub code: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/countries",
    responses(
        (status = 200, description = "All countries ordered by name", body = Vec<CountryModel>),
    ),
    tag = "catalog"
)]
pub async fn list_countries(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
) -> AppResult<impl IntoResponse> {
    if let Some(Extension(cache)) = &cache {
        if let Some(cached) = cache.get::<Vec<CountryModel>>(CACHE_KEY).await {
            return Ok(ApiResponse::ok(cached));
        }
    }

    let service = CountryService::new(db);
    let countries = service.list().await?;

    if let Some(Extension(cache)) = &cache {
        cache.set(CACHE_KEY, &countries, CACHE_TTL_SECS).await;
    }

    Ok(ApiResponse::ok(countries))
}

#[utoipa::path(
    get,
    path = "/api/v1/countries/{slug}",
    params(("slug" = String, Path, description = "Country slug")),
    responses(
        (status = 200, description = "Country detail", body = CountryModel),
        (status = 404, description = "Country not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn get_country(
    Extension(db): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let service = CountryService::new(db);
    let country = service.get_by_slug(&slug).await?;
    Ok(ApiResponse::ok(country))
}

#[utoipa::path(
    post,
    path = "/api/v1/countries",
    security(("jwt_token" = [])),
    request_body = CountryRequest,
    responses(
        (status = 200, description = "Country created", body = CountryModel),
        (status = 409, description = "Duplicate name or code", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn create_country(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Json(payload): Json<CountryRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = CountryService::new(db);
    let country = service
        .create(&payload.name, &payload.local_name, &payload.code)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(country))
}

#[utoipa::path(
    put,
    path = "/api/v1/countries/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "Country slug")),
    request_body = CountryRequest,
    responses(
        (status = 200, description = "Country updated", body = CountryModel),
        (status = 404, description = "Country not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn update_country(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
    Json(payload): Json<CountryRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = CountryService::new(db);
    let country = service
        .update(&slug, &payload.name, &payload.local_name, &payload.code)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(country))
}

#[utoipa::path(
    delete,
    path = "/api/v1/countries/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "Country slug")),
    responses(
        (status = 200, description = "Country deleted", body = String),
        (status = 404, description = "Country not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn delete_country(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = CountryService::new(db);
    service.delete(&slug).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok("Country deleted"))
}
