mod common;

use serde_json::Value;

#[tokio::test]
async fn country_crud() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "cat_country").await;

    let resp = app
        .client
        .post(app.url("/countries"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Cambodia",
            "local_name": "Kampuchea",
            "code": "KH"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let slug = body["data"]["slug"].as_str().unwrap().to_string();
    // Slug is derived from name and code
    assert!(slug.starts_with("cambodia-kh-"));

    // Duplicate name is rejected
    let resp = app
        .client
        .post(app.url("/countries"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "Cambodia", "code": "KH2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    // Public read by slug
    let resp = app
        .client
        .get(app.url(&format!("/countries/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Cambodia");

    // Update keeps the slug
    let resp = app
        .client
        .put(app.url(&format!("/countries/{}", slug)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "Kingdom of Cambodia", "code": "KH" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["slug"], slug);

    // Hard delete
    let resp = app
        .client
        .delete(app.url(&format!("/countries/{}", slug)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/countries/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn address_slug_uses_all_components() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "cat_addr").await;

    let resp = app
        .client
        .post(app.url("/addresses"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "street": "123 Main",
            "city": "Phnom Penh",
            "state": "PP",
            "zip_code": "12000",
            "country": "Cambodia"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let slug = body["data"]["slug"].as_str().unwrap();
    assert!(slug.starts_with("123-main-phnom-penh-pp-12000-cambodia-"));
}

#[tokio::test]
async fn address_requires_street_and_city() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "cat_addr_val").await;

    let resp = app
        .client
        .post(app.url("/addresses"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "street": "", "city": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn school_type_crud_and_list_ordering() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "cat_type").await;

    for label in ["Vocational", "Public", "Private"] {
        let resp = app
            .client
            .post(app.url("/school-types"))
            .bearer_auth(&admin_token)
            .json(&serde_json::json!({ "type_name": label }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let resp = app
        .client
        .get(app.url("/school-types"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["type_name"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Private", "Public", "Vocational"]);

    // Duplicate label is rejected
    let resp = app
        .client
        .post(app.url("/school-types"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "type_name": "Public" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn educational_level_and_field_crud() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "cat_tax").await;

    let resp = app
        .client
        .post(app.url("/educational-levels"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "level_name": "Undergraduate", "color": "#336699" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let level_id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .put(app.url(&format!("/educational-levels/{}", level_id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "level_name": "Postgraduate", "color": "#663399" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["level_name"], "Postgraduate");

    let resp = app
        .client
        .post(app.url("/fields-of-study"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "Computer Science" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let field_id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .get(app.url("/fields-of-study"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let resp = app
        .client
        .delete(app.url(&format!("/fields-of-study/{}", field_id)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url("/fields-of-study"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let resp = app
        .client
        .delete(app.url(&format!("/educational-levels/{}", level_id)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn platform_url_is_validated() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "cat_plat").await;

    let resp = app
        .client
        .post(app.url("/platforms"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "BadNet", "url": "not a url" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = app
        .client
        .post(app.url("/platforms"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "GoodNet", "url": "https://good.example" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn catalog_writes_require_admin() {
    let app = common::spawn_app().await;
    let (_, token) = common::create_test_user(&app, "cat_user").await;

    let resp = app
        .client
        .post(app.url("/countries"))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "name": "Nopeland", "code": "NP" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    let resp = app
        .client
        .post(app.url("/school-types"))
        .json(&serde_json::json!({ "type_name": "Anonymous" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}
