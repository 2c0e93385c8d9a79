use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::{
    AddressModel, EducationalLevelModel, PlatformProfileModel, SchoolModel, SchoolTypeModel,
};
use crate::response::{ApiResponse, PaginatedResponse};
use crate::services::school::{SchoolInput, SchoolService};
use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    Extension, Json,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SchoolRequest {
    /// School name
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub local_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub established: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub founder: String,
    #[serde(default)]
    pub president: String,
    #[serde(default)]
    pub endowment: Option<rust_decimal::Decimal>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub motto: String,
    #[serde(default)]
    pub tuition: Option<rust_decimal::Decimal>,
    #[serde(default)]
    pub self_data: String,
}

impl From<SchoolRequest> for SchoolInput {
    fn from(req: SchoolRequest) -> Self {
        Self {
            name: req.name,
            local_name: req.local_name,
            short_name: req.short_name,
            code: req.code,
            description: req.description,
            established: req.established,
            founder: req.founder,
            president: req.president,
            endowment: req.endowment.unwrap_or_default(),
            location: req.location,
            motto: req.motto,
            tuition: req.tuition.unwrap_or_default(),
            self_data: req.self_data,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SchoolListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Substring match against name, local name, or short name
    pub search: Option<String>,
}

/// School with its related catalog records resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolDetailResponse {
    #[serde(flatten)]
    pub school: SchoolModel,
    pub school_types: Vec<SchoolTypeModel>,
    pub educational_levels: Vec<EducationalLevelModel>,
    pub addresses: Vec<AddressModel>,
    pub platform_profiles: Vec<PlatformProfileModel>,
}

#[utoipa::path(
    get,
    path = "/api/v1/schools",
    params(SchoolListQuery),
    responses(
        (status = 200, description = "Paginated school list", body = PaginatedResponse<SchoolModel>),
    ),
    tag = "schools"
)]
pub async fn list_schools(
    Extension(db): Extension<DatabaseConnection>,
    Query(query): Query<SchoolListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let service = SchoolService::new(db);
    let (schools, total) = service
        .list(page, per_page, false, query.search.as_deref())
        .await?;

    Ok(ApiResponse::ok(PaginatedResponse::new(
        schools, total, page, per_page,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/schools/{slug}",
    params(("slug" = String, Path, description = "School slug")),
    responses(
        (status = 200, description = "School detail", body = SchoolDetailResponse),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn get_school(
    Extension(db): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let service = SchoolService::new(db);
    let school = service.get_by_slug(&slug).await?;
    if !school.is_active {
        return Err(AppError::NotFound);
    }

    let detail = load_detail(&service, school).await?;
    Ok(ApiResponse::ok(detail))
}

#[utoipa::path(
    post,
    path = "/api/v1/schools",
    security(("jwt_token" = [])),
    request_body = SchoolRequest,
    responses(
        (status = 200, description = "School created", body = SchoolModel),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Duplicate name or slug", body = AppError),
    ),
    tag = "schools"
)]
pub async fn create_school(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Json(payload): Json<SchoolRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = SchoolService::new(db);
    let school = service.create(payload.into()).await?;
    Ok(ApiResponse::ok(school))
}

#[utoipa::path(
    put,
    path = "/api/v1/schools/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "School slug")),
    request_body = SchoolRequest,
    responses(
        (status = 200, description = "School updated", body = SchoolModel),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn update_school(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
    Json(payload): Json<SchoolRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = SchoolService::new(db);
    let school = service.update(&slug, payload.into()).await?;
    Ok(ApiResponse::ok(school))
}

#[utoipa::path(
    delete,
    path = "/api/v1/schools/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "School slug")),
    responses(
        (status = 200, description = "School deactivated", body = SchoolModel),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn delete_school(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolService::new(db);
    let school = service.deactivate(&slug).await?;
    Ok(ApiResponse::ok(school))
}

#[utoipa::path(
    post,
    path = "/api/v1/schools/{id}/restore",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "School restored", body = SchoolModel),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn restore_school(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolService::new(db);
    let school = service.restore(id).await?;
    Ok(ApiResponse::ok(school))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct IdListRequest {
    pub ids: Vec<i32>,
}

#[utoipa::path(
    put,
    path = "/api/v1/schools/{id}/types",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    request_body = IdListRequest,
    responses(
        (status = 200, description = "School types replaced", body = String),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn set_school_types(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<IdListRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolService::new(db);
    service.set_school_types(id, payload.ids).await?;
    Ok(ApiResponse::ok("School types updated"))
}

#[utoipa::path(
    put,
    path = "/api/v1/schools/{id}/levels",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    request_body = IdListRequest,
    responses(
        (status = 200, description = "Educational levels replaced", body = String),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn set_school_levels(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<IdListRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolService::new(db);
    service.set_educational_levels(id, payload.ids).await?;
    Ok(ApiResponse::ok("Educational levels updated"))
}

#[utoipa::path(
    put,
    path = "/api/v1/schools/{id}/addresses",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    request_body = IdListRequest,
    responses(
        (status = 200, description = "Addresses replaced", body = String),
        (status = 404, description = "School not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn set_school_addresses(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<IdListRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolService::new(db);
    service.set_addresses(id, payload.ids).await?;
    Ok(ApiResponse::ok("Addresses updated"))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlatformProfileRequest {
    pub platform_id: i32,
    /// Profile URL on the platform
    #[validate(length(min = 1, max = 255))]
    pub profile_url: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/schools/{id}/platforms",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "School ID")),
    request_body = PlatformProfileRequest,
    responses(
        (status = 200, description = "Platform profile attached", body = PlatformProfileModel),
        (status = 404, description = "School not found", body = AppError),
        (status = 409, description = "Profile already exists for this platform", body = AppError),
    ),
    tag = "schools"
)]
pub async fn attach_platform_profile(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PlatformProfileRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = SchoolService::new(db);
    let profile = service
        .attach_platform_profile(id, payload.platform_id, &payload.profile_url)
        .await?;
    Ok(ApiResponse::ok(profile))
}

#[utoipa::path(
    delete,
    path = "/api/v1/schools/platforms/{profile_id}",
    security(("jwt_token" = [])),
    params(("profile_id" = i32, Path, description = "Platform profile ID")),
    responses(
        (status = 200, description = "Platform profile detached", body = String),
        (status = 404, description = "Profile not found", body = AppError),
    ),
    tag = "schools"
)]
pub async fn detach_platform_profile(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(profile_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = SchoolService::new(db);
    service.detach_platform_profile(profile_id).await?;
    Ok(ApiResponse::ok("Platform profile detached"))
}

async fn load_detail(
    service: &SchoolService,
    school: SchoolModel,
) -> AppResult<SchoolDetailResponse> {
    let school_types = service.get_school_types(&school).await?;
    let educational_levels = service.get_educational_levels(&school).await?;
    let addresses = service.get_addresses(&school).await?;
    let platform_profiles = service.get_platform_profiles(school.id).await?;
    Ok(SchoolDetailResponse {
        school,
        school_types,
        educational_levels,
        addresses,
        platform_profiles,
    })
}
