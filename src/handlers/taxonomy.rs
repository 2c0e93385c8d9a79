use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::{EducationalLevelModel, FieldOfStudyModel};
use crate::response::ApiResponse;
use crate::services::cache::CacheService;
use crate::services::taxonomy::TaxonomyService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

const LEVELS_CACHE_KEY: &str = "catalog:educational_levels";
const FIELDS_CACHE_KEY: &str = "catalog:fields_of_study";
const CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EducationalLevelRequest {
    /// Level label (e.g. "Undergraduate")
    #[validate(length(min = 1, max = 255))]
    pub level_name: String,
    /// Display color, hex or named
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FieldOfStudyRequest {
    /// Field name (unique)
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/educational-levels",
    responses(
        (status = 200, description = "All educational levels", body = Vec<EducationalLevelModel>),
    ),
    tag = "catalog"
)]
pub async fn list_levels(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
) -> AppResult<impl IntoResponse> {
    if let Some(Extension(cache)) = &cache {
        if let Some(cached) = cache.get::<Vec<EducationalLevelModel>>(LEVELS_CACHE_KEY).await {
            return Ok(ApiResponse::ok(cached));
        }
    }

    let service = TaxonomyService::new(db);
    let levels = service.list_levels().await?;

    if let Some(Extension(cache)) = &cache {
        cache.set(LEVELS_CACHE_KEY, &levels, CACHE_TTL_SECS).await;
    }

    Ok(ApiResponse::ok(levels))
}

#[utoipa::path(
    get,
    path = "/api/v1/educational-levels/{id}",
    params(("id" = i32, Path, description = "Educational level ID")),
    responses(
        (status = 200, description = "Educational level detail", body = EducationalLevelModel),
        (status = 404, description = "Educational level not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn get_level(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = TaxonomyService::new(db);
    let level = service.get_level(id).await?;
    Ok(ApiResponse::ok(level))
}

#[utoipa::path(
    post,
    path = "/api/v1/educational-levels",
    security(("jwt_token" = [])),
    request_body = EducationalLevelRequest,
    responses(
        (status = 200, description = "Educational level created", body = EducationalLevelModel),
    ),
    tag = "catalog"
)]
pub async fn create_level(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Json(payload): Json<EducationalLevelRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = TaxonomyService::new(db);
    let level = service
        .create_level(&payload.level_name, &payload.color)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(LEVELS_CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(level))
}

#[utoipa::path(
    put,
    path = "/api/v1/educational-levels/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Educational level ID")),
    request_body = EducationalLevelRequest,
    responses(
        (status = 200, description = "Educational level updated", body = EducationalLevelModel),
        (status = 404, description = "Level not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn update_level(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<EducationalLevelRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = TaxonomyService::new(db);
    let level = service
        .update_level(id, &payload.level_name, &payload.color)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(LEVELS_CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(level))
}

#[utoipa::path(
    delete,
    path = "/api/v1/educational-levels/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Educational level ID")),
    responses(
        (status = 200, description = "Educational level deleted", body = String),
        (status = 404, description = "Level not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn delete_level(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = TaxonomyService::new(db);
    service.delete_level(id).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(LEVELS_CACHE_KEY).await;
    }

    Ok(ApiResponse::ok("Educational level deleted"))
}

#[utoipa::path(
    get,
    path = "/api/v1/fields-of-study",
    responses(
        (status = 200, description = "All fields of study", body = Vec<FieldOfStudyModel>),
    ),
    tag = "catalog"
)]
pub async fn list_fields(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
) -> AppResult<impl IntoResponse> {
    if let Some(Extension(cache)) = &cache {
        if let Some(cached) = cache.get::<Vec<FieldOfStudyModel>>(FIELDS_CACHE_KEY).await {
            return Ok(ApiResponse::ok(cached));
        }
    }

    let service = TaxonomyService::new(db);
    let fields = service.list_fields().await?;

    if let Some(Extension(cache)) = &cache {
        cache.set(FIELDS_CACHE_KEY, &fields, CACHE_TTL_SECS).await;
    }

    Ok(ApiResponse::ok(fields))
}

#[utoipa::path(
    get,
    path = "/api/v1/fields-of-study/{id}",
    params(("id" = i32, Path, description = "Field of study ID")),
    responses(
        (status = 200, description = "Field of study detail", body = FieldOfStudyModel),
        (status = 404, description = "Field of study not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn get_field(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = TaxonomyService::new(db);
    let field = service.get_field(id).await?;
    Ok(ApiResponse::ok(field))
}

#[utoipa::path(
    post,
    path = "/api/v1/fields-of-study",
    security(("jwt_token" = [])),
    request_body = FieldOfStudyRequest,
    responses(
        (status = 200, description = "Field of study created", body = FieldOfStudyModel),
        (status = 409, description = "Duplicate field name", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn create_field(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Json(payload): Json<FieldOfStudyRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = TaxonomyService::new(db);
    let field = service.create_field(&payload.name).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(FIELDS_CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(field))
}

#[utoipa::path(
    put,
    path = "/api/v1/fields-of-study/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Field of study ID")),
    request_body = FieldOfStudyRequest,
    responses(
        (status = 200, description = "Field of study updated", body = FieldOfStudyModel),
        (status = 404, description = "Field not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn update_field(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<FieldOfStudyRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = TaxonomyService::new(db);
    let field = service.update_field(id, &payload.name).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(FIELDS_CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(field))
}

#[utoipa::path(
    delete,
    path = "/api/v1/fields-of-study/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Field of study ID")),
    responses(
        (status = 200, description = "Field of study deleted", body = String),
        (status = 404, description = "Field not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn delete_field(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = TaxonomyService::new(db);
    service.delete_field(id).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(FIELDS_CACHE_KEY).await;
    }

    Ok(ApiResponse::ok("Field of study deleted"))
}
