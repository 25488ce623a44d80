#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use clinic_api::auth::permission::Role;
use clinic_api::config::AppConfig;
use clinic_api::handlers::USERS_COLLECTION;
use clinic_api::model::AdminUser;
use clinic_api::AppState;

/// Shared password for every seeded staff account
pub const PASSWORD: &str = "correct-horse-123";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: tempfile::TempDir,
}

/// Build an isolated in-process app with its own temp data directory and
/// three seeded users: admin, editor, viewer.
pub fn test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut config = AppConfig::development("integration-test-secret".to_string());
    config.storage.data_dir = dir.path().to_path_buf();
    // Minimum bcrypt cost keeps the test suite fast
    config.security.bcrypt_cost = 4;

    let state = AppState::new(config);
    seed_users(&state);

    TestApp {
        router: clinic_api::app(state.clone()),
        state,
        _dir: dir,
    }
}

fn seed_users(state: &AppState) {
    let hash = bcrypt::hash(PASSWORD, 4).expect("hash");
    let user = |username: &str, role: Role| AdminUser {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{}@clinic.example", username),
        password_hash: hash.clone(),
        name: format!("Test {}", username),
        role,
        active: true,
        created_at: Utc::now(),
        last_login_at: None,
    };

    let users = vec![
        user("admin", Role::Admin),
        user("editor", Role::Editor),
        user("viewer", Role::Viewer),
    ];
    state
        .store
        .replace(USERS_COLLECTION, &users)
        .expect("seed users");
}

/// Drive one request through the router and decode the JSON body (Null for
/// empty bodies).
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, body)
}

/// Log in as a seeded user and return the `Cookie:` header value.
pub async fn login(router: &Router, username: &str) -> String {
    let (status, headers, body) = send(
        router,
        "POST",
        "/api/auth/login",
        Some(json!({"username": username, "password": PASSWORD})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);

    session_cookie(&headers).expect("login should set the session cookie")
}

/// Extract the session cookie pair from a Set-Cookie header, if present.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = raw.split(';').next()?;
    if pair.starts_with("clinic_session=") {
        Some(pair.to_string())
    } else {
        None
    }
}
