use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::response::ApiResponse;
use crate::services::scholarship::ScholarshipService;
use crate::services::school::SchoolService;
use crate::services::upload::{AssetCategory, UploadConfig, UploadService};
use axum::{
    extract::{Multipart, Path},
    response::IntoResponse,
    Extension,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Public URL of the stored asset
    pub url: String,
}

struct UploadedFile {
    data: Vec<u8>,
    content_type: String,
    filename: String,
}

async fn read_upload(multipart: &mut Multipart) -> AppResult<UploadedFile> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {}", e)))?
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let filename = field.file_name().unwrap_or_default().to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read file data: {}", e)))?;

    Ok(UploadedFile {
        data: data.to_vec(),
        content_type,
        filename,
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/schools/{id}/logo",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "Logo uploaded and attached", body = UploadResponse),
        (status = 404, description = "School not found", body = AppError),
        (status = 413, description = "File too large", body = AppError),
    ),
    tag = "uploads"
)]
pub async fn upload_school_logo(
    Extension(db): Extension<DatabaseConnection>,
    Extension(config): Extension<UploadConfig>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let service = SchoolService::new(db);
    let school = service.get_by_id(id).await?;
    let file = read_upload(&mut multipart).await?;

    let url = UploadService::save_file(
        &config,
        &file.data,
        &file.content_type,
        &school.name,
        &file.filename,
        AssetCategory::SchoolLogo,
    )
    .await?;

    service.set_logo(id, Some(url.clone())).await?;
    Ok(ApiResponse::ok(UploadResponse { url }))
}

#[utoipa::path(
    post,
    path = "/api/v1/schools/{id}/cover",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "Cover image uploaded and attached", body = UploadResponse),
        (status = 404, description = "School not found", body = AppError),
        (status = 413, description = "File too large", body = AppError),
    ),
    tag = "uploads"
)]
pub async fn upload_school_cover(
    Extension(db): Extension<DatabaseConnection>,
    Extension(config): Extension<UploadConfig>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let service = SchoolService::new(db);
    let school = service.get_by_id(id).await?;
    let file = read_upload(&mut multipart).await?;

    let url = UploadService::save_file(
        &config,
        &file.data,
        &file.content_type,
        &school.name,
        &file.filename,
        AssetCategory::SchoolCover,
    )
    .await?;

    service.set_cover_image(id, Some(url.clone())).await?;
    Ok(ApiResponse::ok(UploadResponse { url }))
}

#[utoipa::path(
    post,
    path = "/api/v1/scholarships/{id}/thumbnail",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Thumbnail uploaded and attached", body = UploadResponse),
        (status = 404, description = "Scholarship not found", body = AppError),
        (status = 413, description = "File too large", body = AppError),
    ),
    tag = "uploads"
)]
pub async fn upload_scholarship_thumbnail(
    Extension(db): Extension<DatabaseConnection>,
    Extension(config): Extension<UploadConfig>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let service = ScholarshipService::new(db);
    let scholarship = service.get_by_id(id).await?;
    let file = read_upload(&mut multipart).await?;

    let url = UploadService::save_file(
        &config,
        &file.data,
        &file.content_type,
        &scholarship.name,
        &file.filename,
        AssetCategory::ScholarshipThumbnail,
    )
    .await?;

    service.set_thumbnail(id, Some(url.clone())).await?;
    Ok(ApiResponse::ok(UploadResponse { url }))
}
