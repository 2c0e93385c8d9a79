use crate::error::{AppError, AppResult};
use crate::middleware::auth::require_admin;
use crate::middleware::AuthUser;
use crate::models::{
    ApplicationStatus, CountryModel, EducationalLevelModel, FieldOfStudyModel, ScholarshipModel,
};
use crate::response::{ApiResponse, PaginatedResponse};
use crate::services::scholarship::{ScholarshipInput, ScholarshipService};
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
pub struct ScholarshipRequest {
    /// Scholarship name (unique)
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub local_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub local_description: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub website: String,
    pub amount: Option<rust_decimal::Decimal>,
    #[serde(default)]
    pub full_tuition_coverage: bool,
    pub stipend: Option<rust_decimal::Decimal>,
    #[serde(default)]
    pub eligibility_criteria: String,
    pub min_gpa: Option<rust_decimal::Decimal>,
    #[serde(default)]
    pub required_documents: String,
    pub application_deadline: Option<chrono::NaiveDate>,
    pub application_open_date: Option<chrono::NaiveDate>,
    /// Operator-set window status; defaults to Upcoming on create
    pub application_status: Option<ApplicationStatus>,
    #[serde(default)]
    pub renewable: bool,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub notes: String,
}

impl From<ScholarshipRequest> for ScholarshipInput {
    fn from(req: ScholarshipRequest) -> Self {
        Self {
            name: req.name,
            local_name: req.local_name,
            description: req.description,
            local_description: req.local_description,
            provider: req.provider,
            website: req.website,
            amount: req.amount,
            full_tuition_coverage: req.full_tuition_coverage,
            stipend: req.stipend,
            eligibility_criteria: req.eligibility_criteria,
            min_gpa: req.min_gpa,
            required_documents: req.required_documents,
            application_deadline: req.application_deadline,
            application_open_date: req.application_open_date,
            application_status: req.application_status,
            renewable: req.renewable,
            duration: req.duration,
            contact_email: req.contact_email,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ScholarshipListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Filter by application window status
    pub status: Option<ApplicationStatus>,
    /// Substring match against name or local name
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScholarshipDetailResponse {
    #[serde(flatten)]
    pub scholarship: ScholarshipModel,
    pub target_countries: Vec<CountryModel>,
    pub target_levels: Vec<EducationalLevelModel>,
    pub target_fields: Vec<FieldOfStudyModel>,
}

#[utoipa::path(
    get,
    path = "/api/v1/scholarships",
    params(ScholarshipListQuery),
    responses(
        (status = 200, description = "Paginated scholarship list", body = PaginatedResponse<ScholarshipModel>),
    ),
    tag = "scholarships"
)]
pub async fn list_scholarships(
    Extension(db): Extension<DatabaseConnection>,
    Query(query): Query<ScholarshipListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let service = ScholarshipService::new(db);
    let (scholarships, total) = service
        .list(page, per_page, false, query.status, query.search.as_deref())
        .await?;

    Ok(ApiResponse::ok(PaginatedResponse::new(
        scholarships,
        total,
        page,
        per_page,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/scholarships/{slug}",
    params(("slug" = String, Path, description = "Scholarship slug")),
    responses(
        (status = 200, description = "Scholarship detail", body = ScholarshipDetailResponse),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn get_scholarship(
    Extension(db): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let service = ScholarshipService::new(db);
    let scholarship = service.get_by_slug(&slug).await?;
    if !scholarship.is_active {
        return Err(AppError::NotFound);
    }

    let target_countries = service.get_target_countries(&scholarship).await?;
    let target_levels = service.get_target_levels(&scholarship).await?;
    let target_fields = service.get_target_fields(&scholarship).await?;

    Ok(ApiResponse::ok(ScholarshipDetailResponse {
        scholarship,
        target_countries,
        target_levels,
        target_fields,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/scholarships",
    security(("jwt_token" = [])),
    request_body = ScholarshipRequest,
    responses(
        (status = 200, description = "Scholarship created", body = ScholarshipModel),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Duplicate name or slug", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn create_scholarship(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Json(payload): Json<ScholarshipRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = ScholarshipService::new(db);
    let scholarship = service.create(payload.into()).await?;
    Ok(ApiResponse::ok(scholarship))
}

#[utoipa::path(
    put,
    path = "/api/v1/scholarships/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "Scholarship slug")),
    request_body = ScholarshipRequest,
    responses(
        (status = 200, description = "Scholarship updated", body = ScholarshipModel),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn update_scholarship(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
    Json(payload): Json<ScholarshipRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = ScholarshipService::new(db);
    let scholarship = service.update(&slug, payload.into()).await?;
    Ok(ApiResponse::ok(scholarship))
}

#[utoipa::path(
    delete,
    path = "/api/v1/scholarships/{slug}",
    security(("jwt_token" = [])),
    params(("slug" = String, Path, description = "Scholarship slug")),
    responses(
        (status = 200, description = "Scholarship deactivated", body = ScholarshipModel),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn delete_scholarship(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = ScholarshipService::new(db);
    let scholarship = service.deactivate(&slug).await?;
    Ok(ApiResponse::ok(scholarship))
}

#[utoipa::path(
    post,
    path = "/api/v1/scholarships/{id}/restore",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Scholarship restored", body = ScholarshipModel),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn restore_scholarship(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = ScholarshipService::new(db);
    let scholarship = service.restore(id).await?;
    Ok(ApiResponse::ok(scholarship))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TargetIdsRequest {
    pub ids: Vec<i32>,
}

#[utoipa::path(
    put,
    path = "/api/v1/scholarships/{id}/countries",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Scholarship ID")),
    request_body = TargetIdsRequest,
    responses(
        (status = 200, description = "Target countries replaced", body = String),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn set_target_countries(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<TargetIdsRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = ScholarshipService::new(db);
    service.set_target_countries(id, payload.ids).await?;
    Ok(ApiResponse::ok("Target countries updated"))
}

#[utoipa::path(
    put,
    path = "/api/v1/scholarships/{id}/levels",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Scholarship ID")),
    request_body = TargetIdsRequest,
    responses(
        (status = 200, description = "Target levels replaced", body = String),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn set_target_levels(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<TargetIdsRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = ScholarshipService::new(db);
    service.set_target_levels(id, payload.ids).await?;
    Ok(ApiResponse::ok("Target levels updated"))
}

#[utoipa::path(
    put,
    path = "/api/v1/scholarships/{id}/fields",
    security(("jwt_token" = [])),
    params(("id" = i32, Path, description = "Scholarship ID")),
    request_body = TargetIdsRequest,
    responses(
        (status = 200, description = "Target fields replaced", body = String),
        (status = 404, description = "Scholarship not found", body = AppError),
    ),
    tag = "scholarships"
)]
pub async fn set_target_fields(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<TargetIdsRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&db, &auth_user).await?;
    let service = ScholarshipService::new(db);
    service.set_target_fields(id, payload.ids).await?;
    Ok(ApiResponse::ok("Target fields updated"))
}
