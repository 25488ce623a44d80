mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn customers_submit_bookings_without_a_session() -> Result<()> {
    let app = common::test_app();

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/bookings",
        Some(json!({
            "customer_name": "Layla Hassan",
            "phone": "+971 50 123 4567",
            "preferred_date": "2026-09-01",
            "message": "Morning slot preferred",
        })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "booking failed: {}", body);
    assert_eq!(body["data"]["status"], "pending");
    assert!(body["data"]["id"].is_string());
    Ok(())
}

#[tokio::test]
async fn malformed_booking_reports_every_bad_field_at_once() -> Result<()> {
    let app = common::test_app();

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/bookings",
        Some(json!({
            "customer_name": "L",
            "phone": "nope",
            "preferred_date": "soon",
        })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["field_errors"].as_object().expect("field errors");
    assert!(errors.contains_key("customer_name"));
    assert!(errors.contains_key("phone"));
    assert!(errors.contains_key("preferred_date"));
    Ok(())
}

#[tokio::test]
async fn staff_edits_cannot_store_a_malformed_date() -> Result<()> {
    let app = common::test_app();

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/bookings",
        Some(json!({
            "customer_name": "Layla Hassan",
            "phone": "+971501234567",
            "preferred_date": "2026-09-01",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!(
        "/api/admin/bookings/{}",
        body["data"]["id"].as_str().expect("id")
    );

    let editor = common::login(&app.router, "editor").await;
    let (status, _h, body) = common::send(
        &app.router,
        "PUT",
        &uri,
        Some(json!({"preferred_date": "soon"})),
        Some(&editor),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["preferred_date"], "Invalid format");

    // A well-formed reschedule goes through
    let (status, _h, body) = common::send(
        &app.router,
        "PUT",
        &uri,
        Some(json!({"preferred_date": "2026-10-02"})),
        Some(&editor),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["preferred_date"], "2026-10-02");
    Ok(())
}

#[tokio::test]
async fn staff_read_bookings_but_only_writers_update_them() -> Result<()> {
    let app = common::test_app();

    let (status, _h, body) = common::send(
        &app.router,
        "POST",
        "/api/bookings",
        Some(json!({
            "customer_name": "Layla Hassan",
            "phone": "+971501234567",
            "preferred_date": "2026-09-01",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().expect("id").to_string();

    // Booking list is never public
    let (status, _h, _body) =
        common::send(&app.router, "GET", "/api/admin/bookings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Viewer holds read
    let viewer = common::login(&app.router, "viewer").await;
    let (status, _h, body) =
        common::send(&app.router, "GET", "/api/admin/bookings", None, Some(&viewer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    // But not write
    let uri = format!("/api/admin/bookings/{}", id);
    let (status, _h, _body) = common::send(
        &app.router,
        "PUT",
        &uri,
        Some(json!({"status": "confirmed"})),
        Some(&viewer),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Editor confirms the booking
    let editor = common::login(&app.router, "editor").await;
    let (status, _h, body) = common::send(
        &app.router,
        "PUT",
        &uri,
        Some(json!({"status": "confirmed", "notes": "Called back"})),
        Some(&editor),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "confirmed");
    assert_eq!(body["data"]["notes"], "Called back");
    Ok(())
}
