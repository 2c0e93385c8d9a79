use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::response::{ApiResponse, PaginatedResponse, PaginationQuery};
use crate::services::admin::{AdminService, AdminStats};
use crate::services::preview::{ImagePreview, Previewable};
use crate::services::scholarship::ScholarshipService;
use crate::services::school::SchoolService;
use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    Extension, Json,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::auth::UserResponse;

#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    security(("jwt_token" = [])),
    responses(
        (status = 200, description = "Directory statistics", body = AdminStats),
        (status = 403, description = "Admin role required", body = AppError),
    ),
    tag = "admin"
)]
pub async fn get_stats(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let service = AdminService::new(db);
    let stats = service.get_stats().await?;
    Ok(ApiResponse::ok(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    security(("jwt_token" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "Paginated user list", body = PaginatedResponse<UserResponse>),
        (status = 403, description = "Admin role required", body = AppError),
    ),
    tag = "admin"
)]
pub async fn list_users(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let service = AdminService::new(db);
    let (users, total) = service.list_users(page, per_page).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        users, total, page, per_page,
    )))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    /// New role: user, admin, banned
    pub role: String,
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}/role",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = UserResponse),
        (status = 403, description = "Admin role required", body = AppError),
        (status = 404, description = "User not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn update_user_role(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let service = AdminService::new(db);
    let user = service.update_user_role(id, &payload.role).await?;
    Ok(ApiResponse::ok(UserResponse::from(user)))
}

/// Operator-facing record row with computed image previews.
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewRow {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub previews: Vec<PreviewEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewEntry {
    pub label: String,
    pub preview: ImagePreview,
}

fn preview_row(id: i32, name: String, slug: String, is_active: bool, source: &impl Previewable) -> PreviewRow {
    PreviewRow {
        id,
        name,
        slug,
        is_active,
        previews: source
            .image_previews()
            .into_iter()
            .map(|(label, preview)| PreviewEntry {
                label: label.to_string(),
                preview,
            })
            .collect(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/schools/previews",
    security(("jwt_token" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "Schools with logo and cover previews", body = PaginatedResponse<PreviewRow>),
        (status = 403, description = "Admin role required", body = AppError),
    ),
    tag = "admin"
)]
pub async fn list_school_previews(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let service = SchoolService::new(db);
    let (schools, total) = service.list(page, per_page, true, None).await?;

    let rows: Vec<PreviewRow> = schools
        .into_iter()
        .map(|s| preview_row(s.id, s.name.clone(), s.slug.clone(), s.is_active, &s))
        .collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        rows, total, page, per_page,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/scholarships/previews",
    security(("jwt_token" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "Scholarships with thumbnail previews", body = PaginatedResponse<PreviewRow>),
        (status = 403, description = "Admin role required", body = AppError),
    ),
    tag = "admin"
)]
pub async fn list_scholarship_previews(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let service = ScholarshipService::new(db);
    let (scholarships, total) = service.list(page, per_page, true, None, None).await?;

    let rows: Vec<PreviewRow> = scholarships
        .into_iter()
        .map(|s| preview_row(s.id, s.name.clone(), s.slug.clone(), s.is_active, &s))
        .collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        rows, total, page, per_page,
    )))
}
