use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::AddressModel;
use crate::response::ApiResponse;
use crate::services::address::{AddressInput, AddressService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub street: String,
    #[validate(length(min = 1, max = 255))]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    /// Free-text country name, independent of the countries catalog
    #[serde(default)]
    pub country: String,
}

impl From<AddressRequest> for AddressInput {
    fn from(req: AddressRequest) -> Self {
        Self {
            name: req.name,
            street: req.street,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            country: req.country,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses",
    responses(
        (status = 200, description = "All addresses ordered by city", body = Vec<AddressModel>),
    ),
    tag = "catalog"
)]
pub async fn list_addresses(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let service = AddressService::new(db);
    let addresses = service.list().await?;
    Ok(ApiResponse::ok(addresses))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/{slug}",
    params(("slug" = String, Path, description = "Address slug")),
    responses(
        (status = 200, description = "Address detail", body = AddressModel),
        (status = 404, description = "Address not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn get_address(
    Extension(db): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let service = AddressService::new(db);
    let address = service.get_by_slug(&slug).await?;
    Ok(ApiResponse::ok(address))
}

#[utoipa::path(
    post,
    path = "/api/v1/addresses",
    security(("jwt_token" = [])),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address created", body = AddressModel),
        (status = 409, description = "Duplicate postal composite", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn create_address(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Json(payload): Json<AddressRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = AddressService::new(db);
    let address = service.create(payload.into()).await?;
    Ok(ApiResponse::ok(address))
}

#[utoipa::path(
    put,
    path = "/api/v1/addresses/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "Address slug")),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressModel),
        (status = 404, description = "Address not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn update_address(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
    Json(payload): Json<AddressRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = AddressService::new(db);
    let address = service.update(&slug, payload.into()).await?;
    Ok(ApiResponse::ok(address))
}

#[utoipa::path(
    delete,
    path = "/api/v1/addresses/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "Address slug")),
    responses(
        (status = 200, description = "Address deleted", body = String),
        (status = 404, description = "Address not found", body = AppError),
    ),
    tag = "catalog"
)]
pub async fn delete_address(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = AddressService::new(db);
    service.delete(&slug).await?;
    Ok(ApiResponse::ok("Address deleted"))
}
