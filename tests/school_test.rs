mod common;

use serde_json::Value;

#[tokio::test]
async fn create_and_get_school() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_admin").await;

    let resp = app
        .client
        .post(app.url("/schools"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Acme University",
            "short_name": "AU",
            "description": "A fine institution",
            "endowment": "1000000.50",
            "tuition": "42000.00"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let slug = body["data"]["slug"].as_str().unwrap().to_string();
    assert!(slug.starts_with("acme-university-"));
    // Random 6-hex suffix after the slugified name
    let suffix = slug.rsplit('-').next().unwrap();
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(body["data"]["uuid"].as_str().is_some());
    assert_eq!(body["data"]["is_active"], true);
    assert_eq!(body["data"]["endowment"], "1000000.50");
    assert_eq!(body["data"]["tuition"], "42000.00");

    // Public detail by slug includes empty relation lists
    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Acme University");
    assert_eq!(body["data"]["school_types"], serde_json::json!([]));
    assert_eq!(body["data"]["educational_levels"], serde_json::json!([]));
    assert_eq!(body["data"]["addresses"], serde_json::json!([]));
    assert_eq!(body["data"]["platform_profiles"], serde_json::json!([]));
}

#[tokio::test]
async fn create_school_requires_admin() {
    let app = common::spawn_app().await;
    let (_, token) = common::create_test_user(&app, "sch_user").await;

    // No token
    let resp = app
        .client
        .post(app.url("/schools"))
        .json(&serde_json::json!({ "name": "Unauthorized U" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Non-admin token
    let resp = app
        .client
        .post(app.url("/schools"))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "name": "Forbidden U" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn update_preserves_slug_and_uuid() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_upd").await;
    let (_, slug) = common::create_test_school(&app, &admin_token, "Old Name College").await;

    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let uuid = body["data"]["uuid"].as_str().unwrap().to_string();

    let resp = app
        .client
        .put(app.url(&format!("/schools/{}", slug)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "New Name College" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "New Name College");
    assert_eq!(body["data"]["slug"], slug);
    assert_eq!(body["data"]["uuid"], uuid);
}

#[tokio::test]
async fn soft_delete_hides_from_public_and_restore_brings_back() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_del").await;
    let (id, slug) = common::create_test_school(&app, &admin_token, "Ghost Academy").await;

    let resp = app
        .client
        .delete(app.url(&format!("/schools/{}", slug)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["is_active"], false);

    // Hidden from the public list
    let resp = app.client.get(app.url("/schools")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    let names: Vec<&str> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"Ghost Academy"));

    // Hidden from public detail
    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Restore
    let resp = app
        .client
        .post(app.url(&format!("/schools/{}/restore", id)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn search_matches_name_fields() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_search").await;
    common::create_test_school(&app, &admin_token, "Northwind Institute").await;
    common::create_test_school(&app, &admin_token, "Southbridge College").await;

    let resp = app
        .client
        .get(app.url("/schools?search=Northwind"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Northwind Institute");
}

#[tokio::test]
async fn replace_school_type_links() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_types").await;
    let (id, slug) = common::create_test_school(&app, &admin_token, "Typed University").await;

    let mut type_ids = Vec::new();
    for label in ["Public", "Private"] {
        let resp = app
            .client
            .post(app.url("/school-types"))
            .bearer_auth(&admin_token)
            .json(&serde_json::json!({ "type_name": label }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        type_ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let resp = app
        .client
        .put(app.url(&format!("/schools/{}/types", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "ids": type_ids }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["school_types"].as_array().unwrap().len(), 2);

    // Replacement, not accumulation
    let resp = app
        .client
        .put(app.url(&format!("/schools/{}/types", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "ids": [type_ids[0]] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["school_types"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn attach_and_detach_platform_profile() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_plat").await;
    let (id, slug) = common::create_test_school(&app, &admin_token, "Social University").await;

    let resp = app
        .client
        .post(app.url("/platforms"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "ExampleNet",
            "url": "https://example.net"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let platform_id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .post(app.url(&format!("/schools/{}/platforms", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "platform_id": platform_id,
            "profile_url": "https://example.net/acme"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let profile_id = body["data"]["id"].as_i64().unwrap();

    // Duplicate school+platform pair is rejected
    let resp = app
        .client
        .post(app.url(&format!("/schools/{}/platforms", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "platform_id": platform_id,
            "profile_url": "https://example.net/acme-again"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["data"]["platform_profiles"].as_array().unwrap().len(),
        1
    );

    let resp = app
        .client
        .delete(app.url(&format!("/schools/platforms/{}", profile_id)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/schools/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["data"]["platform_profiles"].as_array().unwrap().len(),
        0
    );
}

#[tokio::test]
async fn unknown_school_returns_404() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "sch_404").await;

    let resp = app
        .client
        .get(app.url("/schools/no-such-school-abc123"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app
        .client
        .put(app.url("/schools/no-such-school-abc123"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "Nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
