use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::SchoolTypeModel;
use crate::response::ApiResponse;
use crate::services::cache::CacheService;
use crate::services::school_type::SchoolTypeService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

const CACHE_KEY: &str = "catalog:school_types";
const CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SchoolTypeRequest {
    /// Type label (unique)
    #[validate(length(min = 1, max = 255))]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/school-types",
    responses(
        (status = 200, description = "All school types ordered by label", body = Vec<SchoolTypeModel>),
    ),
    tag = "catalog"
)]
pub async fn list_school_types(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
) -> AppResult<impl IntoResponse> {
    if let Some(Extension(cache)) = &cache {
        if let Some(cached) = cache.get::<Vec<SchoolTypeModel>>(CACHE_KEY).await {
            return Ok(ApiResponse::ok(cached));
        }
    }

    let service = SchoolTypeService::new(db);
    let types = service.list().await?;

    if let Some(Extension(cache)) = &cache {
        cache.set(CACHE_KEY, &types, CACHE_TTL_SECS).await;
    }

    Ok(ApiResponse::ok(types))
}

#[utoipa::path(
    get,
    path = "/api/v1/school-types/{id}",
    params(("id" = i32, Path, description = "School type ID")),
    responses(
        (status = 200, description = "School type detail", body = SchoolTypeModel),
        (status = 404, description = "School type not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn get_school_type(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = SchoolTypeService::new(db);
    let school_type = service.get_by_id(id).await?;
    Ok(ApiResponse::ok(school_type))
}

#[utoipa::path(
    post,
    path = "/api/v1/school-types",
    security(("jwt_token" = [])),
    request_body = SchoolTypeRequest,
    responses(
        (status = 200, description = "School type created", body = SchoolTypeModel),
        (status = 409, description = "Duplicate type label", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn create_school_type(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Json(payload): Json<SchoolTypeRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = SchoolTypeService::new(db);
    let school_type = service
        .create(&payload.type_name, &payload.description, &payload.icon)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(school_type))
}

#[utoipa::path(
    put,
    path = "/api/v1/school-types/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School type ID")),
    request_body = SchoolTypeRequest,
    responses(
        (status = 200, description = "School type updated", body = SchoolTypeModel),
        (status = 404, description = "School type not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn update_school_type(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<SchoolTypeRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = SchoolTypeService::new(db);
    let school_type = service
        .update(id, &payload.type_name, &payload.description, &payload.icon)
        .await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok(school_type))
}

#[utoipa::path(
    delete,
    path = "/api/v1/school-types/{id}",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School type ID")),
    responses(
        (status = 200, description = "School type deleted", body = String),
        (status = 404, description = "School type not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn delete_school_type(
    Extension(db): Extension<DatabaseConnection>,
    cache: Option<Extension<CacheService>>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolTypeService::new(db);
    service.delete(id).await?;

    if let Some(Extension(cache)) = &cache {
        cache.invalidate(CACHE_KEY).await;
    }

    Ok(ApiResponse::ok("School type deleted"))
}
