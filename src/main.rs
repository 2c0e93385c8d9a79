mod config;
mod error;
mod handlers;
mod middleware;
mod migration;
mod models;
mod response;
mod routes;
mod services;
mod utils;

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde_json::json;
use services::cache::CacheService;
use services::upload::UploadConfig;
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        // Auth routes
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::auth::refresh_token,
        crate::handlers::auth::logout,
        crate::handlers::auth::get_current_user,
        crate::handlers::auth::change_password,
        // School routes
        crate::handlers::school::list_schools,
        crate::handlers::school::get_school,
        crate::handlers::school::create_school,
        crate::handlers::school::update_school,
        crate::handlers::school::delete_school,
        crate::handlers::school::restore_school,
        crate::handlers::school::set_school_types,
        crate::handlers::school::set_school_levels,
        crate::handlers::school::set_school_addresses,
        crate::handlers::school::attach_platform_profile,
        crate::handlers::school::detach_platform_profile,
        // Scholarship routes
        crate::handlers::scholarship::list_scholarships,
        crate::handlers::scholarship::get_scholarship,
        crate::handlers::scholarship::create_scholarship,
        crate::handlers::scholarship::update_scholarship,
        crate::handlers::scholarship::delete_scholarship,
        crate::handlers::scholarship::restore_scholarship,
        crate::handlers::scholarship::set_target_countries,
        crate::handlers::scholarship::set_target_levels,
        crate::handlers::scholarship::set_target_fields,
        // Catalog routes
        crate::handlers::country::list_countries,
        crate::handlers::country::get_country,
        crate::handlers::country::create_country,
        crate::handlers::country::update_country,
        crate::handlers::country::delete_country,
        crate::handlers::address::list_addresses,
        crate::handlers::address::get_address,
        crate::handlers::address::create_address,
        crate::handlers::address::update_address,
        crate::handlers::address::delete_address,
        crate::handlers::school_type::list_school_types,
        crate::handlers::school_type::get_school_type,
        crate::handlers::school_type::create_school_type,
        crate::handlers::school_type::update_school_type,
        crate::handlers::school_type::delete_school_type,
        crate::handlers::taxonomy::list_levels,
        crate::handlers::taxonomy::get_level,
        crate::handlers::taxonomy::create_level,
        crate::handlers::taxonomy::update_level,
        crate::handlers::taxonomy::delete_level,
        crate::handlers::taxonomy::list_fields,
        crate::handlers::taxonomy::get_field,
        crate::handlers::taxonomy::create_field,
        crate::handlers::taxonomy::update_field,
        crate::handlers::taxonomy::delete_field,
        crate::handlers::platform::list_platforms,
        crate::handlers::platform::get_platform,
        crate::handlers::platform::create_platform,
        crate::handlers::platform::update_platform,
        crate::handlers::platform::delete_platform,
        // Upload routes
        crate::handlers::upload::upload_school_logo,
        crate::handlers::upload::upload_school_cover,
        crate::handlers::upload::upload_scholarship_thumbnail,
        // Admin routes
        crate::handlers::admin::get_stats,
        crate::handlers::admin::list_users,
        crate::handlers::admin::update_user_role,
        crate::handlers::admin::list_school_previews,
        crate::handlers::admin::list_scholarship_previews,
    ),
    components(
        schemas(
            crate::response::ApiResponse<serde_json::Value>,
            crate::response::PaginatedResponse<serde_json::Value>,
            crate::response::PaginationQuery,
            crate::error::AppError,
            // Auth
            crate::handlers::auth::RegisterRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::RefreshTokenRequest,
            crate::handlers::auth::AuthResponse,
            crate::handlers::auth::TokenResponse,
            crate::handlers::auth::UserResponse,
            crate::handlers::auth::ChangePasswordRequest,
            // School
            crate::handlers::school::SchoolRequest,
            crate::handlers::school::SchoolDetailResponse,
            crate::handlers::school::IdListRequest,
            crate::handlers::school::PlatformProfileRequest,
            // Scholarship
            crate::handlers::scholarship::ScholarshipRequest,
            crate::handlers::scholarship::ScholarshipDetailResponse,
            crate::handlers::scholarship::TargetIdsRequest,
            // Catalog
            crate::handlers::country::CountryRequest,
            crate::handlers::address::AddressRequest,
            crate::handlers::school_type::SchoolTypeRequest,
            crate::handlers::taxonomy::EducationalLevelRequest,
            crate::handlers::taxonomy::FieldOfStudyRequest,
            crate::handlers::platform::PlatformRequest,
            // Upload
            crate::handlers::upload::UploadResponse,
            // Admin
            crate::services::admin::AdminStats,
            crate::handlers::admin::UpdateRoleRequest,
            crate::handlers::admin::PreviewRow,
            crate::handlers::admin::PreviewEntry,
            crate::services::preview::ImagePreview,
        )
    ),
    tags(
        (name = "auth", description = "Authentication operations"),
        (name = "schools", description = "School directory operations"),
        (name = "scholarships", description = "Scholarship directory operations"),
        (name = "catalog", description = "Catalog and taxonomy operations"),
        (name = "uploads", description = "Media upload operations"),
        (name = "admin", description = "Administrative operations"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eduhub=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration before doing anything else
    let jwt_config = validate_config()?;

    // Initialize JWT config
    utils::jwt::init_jwt_config(jwt_config)?;

    tracing::info!("Starting EduHub API v{}...", env!("CARGO_PKG_VERSION"));

    let db = config::database::get_database().await?;
    tracing::info!("Database connected successfully");

    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    services::bootstrap_admin::ensure_bootstrap_admin(&db).await?;

    let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string());
    let upload_config = UploadConfig {
        media_root: media_root.clone(),
    };

    // Redis/Cache is optional - graceful degradation if unavailable
    let cache = match config::redis::get_redis().await {
        Ok(conn) => {
            tracing::info!("Redis connected successfully");
            Some(CacheService::new(conn))
        }
        Err(e) => {
            tracing::warn!("Redis unavailable, running without cache: {}", e);
            None
        }
    };

    let mut app = create_app(&media_root)
        .layer(Extension(db))
        .layer(Extension(upload_config));

    if let Some(cache) = cache {
        app = app.layer(Extension(cache));
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Validate all required configuration at startup (fail-fast).
fn validate_config() -> anyhow::Result<crate::config::jwt::JwtConfig> {
    // JWT config — validated and cached
    let jwt_config = config::jwt::JwtConfig::from_env()?;

    // DATABASE_URL — checked here for early error; actual connection happens later
    if env::var("DATABASE_URL").is_err() {
        return Err(anyhow::anyhow!(
            "DATABASE_URL environment variable must be set"
        ));
    }

    // Media root — create if needed
    let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string());
    std::fs::create_dir_all(&media_root)
        .map_err(|e| anyhow::anyhow!("Failed to create media root '{}': {}", media_root, e))?;

    Ok(jwt_config)
}

fn build_cors_layer() -> CorsLayer {
    use axum::http::{header, HeaderValue, Method};

    let origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins_str == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

fn create_app(media_root: &str) -> Router {
    // Stored URLs are rooted at /uploads, mirrored under <media_root>/uploads on disk
    let uploads_dir = Path::new(media_root).join("uploads");

    Router::new()
        .route("/", get(health_check))
        .merge(routes::create_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(axum::middleware::from_fn(
            middleware::security::security_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Health check successful", body = serde_json::Value)
    )
)]
async fn health_check(Extension(db): Extension<DatabaseConnection>) -> impl IntoResponse {
    let db_ok = db.ping().await.is_ok();
    let status = if db_ok { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "service": "EduHub API",
        "version": env!("CARGO_PKG_VERSION"),
        "database": db_ok,
    }))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, gracefully shutting down...");
}
