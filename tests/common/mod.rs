#![allow(dead_code)]

use eduhub::models;
use reqwest::Client;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Once,
};

static INIT: Once = Once::new();

fn init_env() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
        std::env::set_var(
            "JWT_SECRET",
            "integration_test_secret_that_is_at_least_32_characters_long",
        );
        std::env::set_var("RATE_LIMIT_ENABLED", "false");
        let config = eduhub::config::jwt::JwtConfig::from_env().unwrap();
        let _ = eduhub::utils::jwt::init_jwt_config(config);
    });
}

pub struct TestApp {
    pub addr: String,
    pub db: DatabaseConnection,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.addr, path)
    }
}

pub async fn spawn_app() -> TestApp {
    init_env();

    // One shared in-memory database per app instance
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1);

    let db = sea_orm::Database::connect(options)
        .await
        .expect("Failed to connect to test database");

    eduhub::migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let media_root = std::env::temp_dir().join("eduhub_test_media");
    let upload_config = eduhub::services::upload::UploadConfig {
        media_root: media_root.to_string_lossy().into_owned(),
    };

    let app = axum::Router::new()
        .route("/", axum::routing::get(|| async { "ok" }))
        .merge(eduhub::routes::create_routes())
        .layer(axum::middleware::from_fn(
            eduhub::middleware::security::security_headers_middleware,
        ))
        .layer(axum::extract::Extension(db.clone()))
        .layer(axum::extract::Extension(upload_config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    let addr_str = format!("http://{}", addr);
    let client = Client::new();

    TestApp {
        addr: addr_str,
        db,
        client,
    }
}

/// Register a user and return (user_id, token).
pub async fn create_test_user(app: &TestApp, username_prefix: &str) -> (i32, String) {
    static USER_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = USER_COUNTER.fetch_add(1, Ordering::SeqCst);
    let unique_username = format!("{}_{}", username_prefix, counter);

    let resp = app
        .client
        .post(app.url("/auth/register"))
        .json(&serde_json::json!({
            "username": unique_username,
            "email": format!("{}@test.com", unique_username),
            "password": "test_password_123"
        }))
        .send()
        .await
        .expect("Failed to register user");

    let status = resp.status();
    let body: serde_json::Value = resp.json().await.unwrap_or_else(|e| {
        panic!(
            "Failed to parse register response for user '{}': status={}, error={}",
            unique_username, status, e
        );
    });

    if !body["success"].as_bool().unwrap_or(false) {
        panic!(
            "Failed to register user '{}': status={}, body={}",
            unique_username, status, body
        );
    }

    let user_id = body["data"]["user_id"]
        .as_i64()
        .unwrap_or_else(|| panic!("Response missing user_id for '{}': {}", unique_username, body))
        as i32;
    let token = body["data"]["token"]
        .as_str()
        .unwrap_or_else(|| panic!("Response missing token for '{}': {}", unique_username, body))
        .to_string();
    (user_id, token)
}

/// Make a user admin by directly updating the database.
pub async fn make_admin(db: &DatabaseConnection, user_id: i32) {
    let user = models::User::find_by_id(user_id)
        .one(db)
        .await
        .expect("Failed to load user")
        .expect("User not found");

    let mut active: models::user::ActiveModel = user.into();
    active.role = Set("admin".to_string());
    active.update(db).await.expect("Failed to make user admin");
}

/// Register a fresh user and promote to admin. The role is read from
/// the database on every request, so the original token stays valid.
pub async fn create_admin_user(app: &TestApp, username_prefix: &str) -> (i32, String) {
    let (user_id, token) = create_test_user(app, username_prefix).await;
    make_admin(&app.db, user_id).await;
    (user_id, token)
}

/// Create a school through the API and return its (id, slug).
pub async fn create_test_school(app: &TestApp, admin_token: &str, name: &str) -> (i32, String) {
    let resp = app
        .client
        .post(app.url("/schools"))
        .bearer_auth(admin_token)
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create school");

    let status = resp.status();
    let body: serde_json::Value = resp.json().await.expect("Failed to parse school response");
    if !body["success"].as_bool().unwrap_or(false) {
        panic!("Failed to create school: status={}, body={}", status, body);
    }

    let id = body["data"]["id"].as_i64().expect("School missing id") as i32;
    let slug = body["data"]["slug"]
        .as_str()
        .expect("School missing slug")
        .to_string();
    (id, slug)
}

/// Create a scholarship through the API and return its (id, slug).
pub async fn create_test_scholarship(
    app: &TestApp,
    admin_token: &str,
    name: &str,
) -> (i32, String) {
    let resp = app
        .client
        .post(app.url("/scholarships"))
        .bearer_auth(admin_token)
        .json(&serde_json::json!({ "name": name, "provider": "Test Provider" }))
        .send()
        .await
        .expect("Failed to create scholarship");

    let status = resp.status();
    let body: serde_json::Value = resp
        .json()
        .await
        .expect("Failed to parse scholarship response");
    if !body["success"].as_bool().unwrap_or(false) {
        panic!(
            "Failed to create scholarship: status={}, body={}",
            status, body
        );
    }

    let id = body["data"]["id"].as_i64().expect("Scholarship missing id") as i32;
    let slug = body["data"]["slug"]
        .as_str()
        .expect("Scholarship missing slug")
        .to_string();
    (id, slug)
}
