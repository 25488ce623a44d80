mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn public_content_reads_need_no_session() -> Result<()> {
    let app = common::test_app();

    let (status, _h, body) =
        common::send(&app.router, "GET", "/api/content/services", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, _h, _body) =
        common::send(&app.router, "GET", "/api/content/not-a-collection", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn editor_creates_updates_and_deletes_a_blog_post() -> Result<()> {
    let app = common::test_app();
    let editor = common::login(&app.router, "editor").await;

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/admin/content/blog",
        Some(json!({
            "title": {"en": "Summer skin care", "ar": "العناية بالبشرة صيفا"},
            "slug": "summer-skin-care",
            "content": {"en": "Long form body", "ar": "نص طويل"},
        })),
        Some(&editor),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    let id = body["data"]["id"].as_str().expect("generated id").to_string();
    assert!(body["data"]["created_at"].is_string());

    // Public read sees the new record
    let uri = format!("/api/content/blog/{}", id);
    let (status, _h, body) = common::send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "summer-skin-care");

    // Merge update keeps untouched fields and server-owned ones
    let admin_uri = format!("/api/admin/content/blog/{}", id);
    let (status, _h, body) = common::send(
        &app.router,
        "PUT",
        &admin_uri,
        Some(json!({"slug": "summer-skin", "id": "attacker-chosen"})),
        Some(&editor),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "summer-skin");
    assert_eq!(body["data"]["id"], id, "id is server-owned");
    assert_eq!(body["data"]["title"]["en"], "Summer skin care");

    // Delete, then the public read 404s
    let (status, _h, _body) =
        common::send(&app.router, "DELETE", &admin_uri, None, Some(&editor)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _h, _body) = common::send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn bad_slug_is_reported_as_a_field_error() -> Result<()> {
    let app = common::test_app();
    let editor = common::login(&app.router, "editor").await;

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/admin/content/blog",
        Some(json!({
            "title": {"en": "My Post", "ar": "مقالتي"},
            "slug": "My Post!",
            "content": {"en": "body", "ar": "نص"},
        })),
        Some(&editor),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field_errors"]["slug"], "Invalid format");
    assert!(body["field_errors"].get("title").is_none());
    Ok(())
}

#[tokio::test]
async fn missing_bilingual_half_fails_creation() -> Result<()> {
    let app = common::test_app();
    let editor = common::login(&app.router, "editor").await;

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/admin/content/services",
        Some(json!({
            "title": {"en": "Facial", "ar": ""},
            "description": {"en": "Deep cleanse", "ar": "تنظيف عميق"},
        })),
        Some(&editor),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["field_errors"]["title"],
        "This field is required in both languages"
    );
    Ok(())
}

#[tokio::test]
async fn unauthenticated_update_leaves_the_collection_untouched() -> Result<()> {
    let app = common::test_app();
    let editor = common::login(&app.router, "editor").await;

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/admin/content/blog",
        Some(json!({
            "title": {"en": "Original", "ar": "الأصل"},
            "slug": "original",
            "content": {"en": "body", "ar": "نص"},
        })),
        Some(&editor),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().expect("id").to_string();

    let before: Vec<Value> = app.state.store.collection("blog")?;

    // No cookie at all
    let (status, _h, _body) = common::send(
        &app.router,
        "PUT",
        &format!("/api/admin/content/blog/{}", id),
        Some(json!({"slug": "hijacked"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let after: Vec<Value> = app.state.store.collection("blog")?;
    assert_eq!(before, after, "collection on disk must be unchanged");
    Ok(())
}
