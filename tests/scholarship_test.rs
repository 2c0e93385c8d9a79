mod common;

use serde_json::Value;

#[tokio::test]
async fn create_and_get_scholarship() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "schol_admin").await;

    let resp = app
        .client
        .post(app.url("/scholarships"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Merit Grant",
            "provider": "Acme Foundation",
            "amount": "5000.00",
            "renewable": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let slug = body["data"]["slug"].as_str().unwrap().to_string();
    // Slug is built from name and provider
    assert!(slug.starts_with("merit-grant-acme-foundation-"));
    assert_eq!(body["data"]["application_status"], "Upcoming");
    assert_eq!(body["data"]["is_active"], true);

    let resp = app
        .client
        .get(app.url(&format!("/scholarships/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Merit Grant");
    assert_eq!(body["data"]["target_countries"], serde_json::json!([]));
    assert_eq!(body["data"]["target_levels"], serde_json::json!([]));
    assert_eq!(body["data"]["target_fields"], serde_json::json!([]));
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "schol_dup").await;
    common::create_test_scholarship(&app, &admin_token, "Unique Award").await;

    let resp = app
        .client
        .post(app.url("/scholarships"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Unique Award",
            "provider": "Someone Else"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn update_preserves_slug_and_status_when_omitted() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "schol_upd").await;
    let (_, slug) = common::create_test_scholarship(&app, &admin_token, "Rolling Award").await;

    // Set status explicitly
    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}", slug)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Rolling Award",
            "provider": "Test Provider",
            "application_status": "Open"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["application_status"], "Open");

    // Omitting the status on a later update keeps the stored value
    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}", slug)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Rolling Award Renamed",
            "provider": "Test Provider"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["application_status"], "Open");
    assert_eq!(body["data"]["slug"], slug);
}

#[tokio::test]
async fn list_filters_by_status() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "schol_filter").await;
    let (_, open_slug) = common::create_test_scholarship(&app, &admin_token, "Open Award").await;
    common::create_test_scholarship(&app, &admin_token, "Upcoming Award").await;

    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}", open_slug)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({
            "name": "Open Award",
            "provider": "Test Provider",
            "application_status": "Open"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url("/scholarships?status=Open"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Open Award");

    let resp = app
        .client
        .get(app.url("/scholarships?status=Upcoming"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Upcoming Award");
}

#[tokio::test]
async fn soft_delete_and_restore() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "schol_del").await;
    let (id, slug) = common::create_test_scholarship(&app, &admin_token, "Vanishing Award").await;

    let resp = app
        .client
        .delete(app.url(&format!("/scholarships/{}", slug)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/scholarships/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app
        .client
        .post(app.url(&format!("/scholarships/{}/restore", id)))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/scholarships/{}", slug)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn replace_target_links() {
    let app = common::spawn_app().await;
    let (_, admin_token) = common::create_admin_user(&app, "schol_targets").await;
    let (id, slug) = common::create_test_scholarship(&app, &admin_token, "Targeted Award").await;

    let mut country_ids = Vec::new();
    for (name, code) in [("Freedonia", "FD"), ("Sylvania", "SY")] {
        let resp = app
            .client
            .post(app.url("/countries"))
            .bearer_auth(&admin_token)
            .json(&serde_json::json!({ "name": name, "code": code }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        country_ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let resp = app
        .client
        .post(app.url("/educational-levels"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "level_name": "Graduate" }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let level_id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .post(app.url("/fields-of-study"))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "name": "Engineering" }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let field_id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}/countries", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "ids": country_ids }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}/levels", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "ids": [level_id] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}/fields", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "ids": [field_id] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/scholarships/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["target_countries"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["target_levels"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["target_fields"].as_array().unwrap().len(), 1);

    // Replacement, not accumulation
    let resp = app
        .client
        .put(app.url(&format!("/scholarships/{}/countries", id)))
        .bearer_auth(&admin_token)
        .json(&serde_json::json!({ "ids": [country_ids[0]] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = app
        .client
        .get(app.url(&format!("/scholarships/{}", slug)))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["target_countries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn write_endpoints_require_admin() {
    let app = common::spawn_app().await;
    let (_, token) = common::create_test_user(&app, "schol_user").await;

    let resp = app
        .client
        .post(app.url("/scholarships"))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "name": "Nope Award" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}
