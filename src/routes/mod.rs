use crate::config::rate_limit::{RateLimitConfig, RateLimitRule};
use crate::handlers;
use crate::middleware::auth::auth_middleware;
use axum::{middleware, routing, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

pub fn create_routes() -> Router {
    Router::new().nest("/api/v1", api_routes())
}

fn api_routes() -> Router {
    let rate_limit_config = RateLimitConfig::from_env();

    let auth = auth_routes(&rate_limit_config);
    let public_read = public_read_routes(&rate_limit_config);
    let protected =
        protected_routes(&rate_limit_config).layer(middleware::from_fn(auth_middleware));

    auth.merge(public_read).merge(protected)
}

/// Auth routes: register, login, token refresh, logout.
fn auth_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new()
        .route("/auth/register", routing::post(handlers::auth::register))
        .route("/auth/login", routing::post(handlers::auth::login))
        .route("/auth/refresh", routing::post(handlers::auth::refresh_token))
        .route("/auth/logout", routing::post(handlers::auth::logout));

    with_optional_rate_limit(router, config.enabled, config.auth)
}

/// Public read routes: directory browsing and catalog lookups.
fn public_read_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new()
        // Schools
        .route("/schools", routing::get(handlers::school::list_schools))
        .route("/schools/{slug}", routing::get(handlers::school::get_school))
        // Scholarships
        .route(
            "/scholarships",
            routing::get(handlers::scholarship::list_scholarships),
        )
        .route(
            "/scholarships/{slug}",
            routing::get(handlers::scholarship::get_scholarship),
        )
        // Catalog
        .route("/countries", routing::get(handlers::country::list_countries))
        .route(
            "/countries/{slug}",
            routing::get(handlers::country::get_country),
        )
        .route(
            "/addresses",
            routing::get(handlers::address::list_addresses),
        )
        .route(
            "/addresses/{slug}",
            routing::get(handlers::address::get_address),
        )
        .route(
            "/school-types",
            routing::get(handlers::school_type::list_school_types),
        )
        .route(
            "/school-types/{id}",
            routing::get(handlers::school_type::get_school_type),
        )
        .route(
            "/educational-levels",
            routing::get(handlers::taxonomy::list_levels),
        )
        .route(
            "/educational-levels/{id}",
            routing::get(handlers::taxonomy::get_level),
        )
        .route(
            "/fields-of-study",
            routing::get(handlers::taxonomy::list_fields),
        )
        .route(
            "/fields-of-study/{id}",
            routing::get(handlers::taxonomy::get_field),
        )
        .route(
            "/platforms",
            routing::get(handlers::platform::list_platforms),
        )
        .route(
            "/platforms/{id}",
            routing::get(handlers::platform::get_platform),
        );

    with_optional_rate_limit(router, config.enabled, config.public_read)
}

/// Protected routes: authenticated session plus operator writes
/// (admin role checked in the handlers).
fn protected_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new()
        // Auth
        .route("/auth/me", routing::get(handlers::auth::get_current_user))
        .route("/auth/password", routing::put(handlers::auth::change_password))
        // Schools
        .route("/schools", routing::post(handlers::school::create_school))
        .route(
            "/schools/{slug}",
            routing::put(handlers::school::update_school)
                .delete(handlers::school::delete_school),
        )
        .route(
            "/schools/{id}/restore",
            routing::post(handlers::school::restore_school),
        )
        .route(
            "/schools/{id}/types",
            routing::put(handlers::school::set_school_types),
        )
        .route(
            "/schools/{id}/levels",
            routing::put(handlers::school::set_school_levels),
        )
        .route(
            "/schools/{id}/addresses",
            routing::put(handlers::school::set_school_addresses),
        )
        .route(
            "/schools/{id}/platforms",
            routing::post(handlers::school::attach_platform_profile),
        )
        .route(
            "/schools/platforms/{profile_id}",
            routing::delete(handlers::school::detach_platform_profile),
        )
        .route(
            "/schools/{id}/logo",
            routing::post(handlers::upload::upload_school_logo),
        )
        .route(
            "/schools/{id}/cover",
            routing::post(handlers::upload::upload_school_cover),
        )
        // Scholarships
        .route(
            "/scholarships",
            routing::post(handlers::scholarship::create_scholarship),
        )
        .route(
            "/scholarships/{slug}",
            routing::put(handlers::scholarship::update_scholarship)
                .delete(handlers::scholarship::delete_scholarship),
        )
        .route(
            "/scholarships/{id}/restore",
            routing::post(handlers::scholarship::restore_scholarship),
        )
        .route(
            "/scholarships/{id}/countries",
            routing::put(handlers::scholarship::set_target_countries),
        )
        .route(
            "/scholarships/{id}/levels",
            routing::put(handlers::scholarship::set_target_levels),
        )
        .route(
            "/scholarships/{id}/fields",
            routing::put(handlers::scholarship::set_target_fields),
        )
        .route(
            "/scholarships/{id}/thumbnail",
            routing::post(handlers::upload::upload_scholarship_thumbnail),
        )
        // Catalog maintenance
        .route(
            "/countries",
            routing::post(handlers::country::create_country),
        )
        .route(
            "/countries/{slug}",
            routing::put(handlers::country::update_country)
                .delete(handlers::country::delete_country),
        )
        .route(
            "/addresses",
            routing::post(handlers::address::create_address),
        )
        .route(
            "/addresses/{slug}",
            routing::put(handlers::address::update_address)
                .delete(handlers::address::delete_address),
        )
        .route(
            "/school-types",
            routing::post(handlers::school_type::create_school_type),
        )
        .route(
            "/school-types/{id}",
            routing::put(handlers::school_type::update_school_type)
                .delete(handlers::school_type::delete_school_type),
        )
        .route(
            "/educational-levels",
            routing::post(handlers::taxonomy::create_level),
        )
        .route(
            "/educational-levels/{id}",
            routing::put(handlers::taxonomy::update_level)
                .delete(handlers::taxonomy::delete_level),
        )
        .route(
            "/fields-of-study",
            routing::post(handlers::taxonomy::create_field),
        )
        .route(
            "/fields-of-study/{id}",
            routing::put(handlers::taxonomy::update_field)
                .delete(handlers::taxonomy::delete_field),
        )
        .route(
            "/platforms",
            routing::post(handlers::platform::create_platform),
        )
        .route(
            "/platforms/{id}",
            routing::put(handlers::platform::update_platform)
                .delete(handlers::platform::delete_platform),
        )
        // Admin
        .route("/admin/stats", routing::get(handlers::admin::get_stats))
        .route("/admin/users", routing::get(handlers::admin::list_users))
        .route(
            "/admin/users/{id}/role",
            routing::put(handlers::admin::update_user_role),
        )
        .route(
            "/admin/schools/previews",
            routing::get(handlers::admin::list_school_previews),
        )
        .route(
            "/admin/scholarships/previews",
            routing::get(handlers::admin::list_scholarship_previews),
        );

    with_optional_rate_limit(router, config.enabled, config.protected)
}

fn with_optional_rate_limit(router: Router, enabled: bool, rule: RateLimitRule) -> Router {
    if !enabled {
        return router;
    }

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rule.per_second)
        .burst_size(rule.burst_size)
        .finish()
        .expect("Invalid rate limit configuration");

    router.layer(GovernorLayer::new(governor_conf))
}
