use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{session, Session};
use crate::error::ApiError;
use crate::handlers::USERS_COLLECTION;
use crate::middleware::ApiResponse;
use crate::model::{AdminUser, UserView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Unknown username, wrong password, and inactive account all produce the
/// identical "Invalid credentials" response so usernames cannot be
/// enumerated.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, ApiResponse<UserView>), ApiError> {
    let mut users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;

    let Some(index) = users
        .iter()
        .position(|u| u.username == body.username && u.active)
    else {
        tracing::warn!(username = %body.username, "login rejected");
        return Err(ApiError::invalid_credentials());
    };

    // A hash that fails to parse is treated the same as a wrong password
    let verified = bcrypt::verify(&body.password, &users[index].password_hash).unwrap_or(false);
    if !verified {
        tracing::warn!(username = %body.username, "login rejected");
        return Err(ApiError::invalid_credentials());
    }

    users[index].last_login_at = Some(Utc::now());
    state.store.replace(USERS_COLLECTION, &users)?;

    let user = &users[index];
    let token = state.keys.issue(user)?;
    let jar = session::set(jar, token, &state.config);

    tracing::info!(username = %user.username, role = user.role.as_str(), "login succeeded");
    Ok((jar, ApiResponse::success(UserView::from(user))))
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, ApiResponse<Value>) {
    (
        session::clear(jar),
        ApiResponse::success(json!({"logged_out": true})),
    )
}

/// GET /api/auth/me
pub async fn me(session: Session) -> Result<ApiResponse<Value>, ApiError> {
    let principal = session.0.ok_or_else(ApiError::unauthorized)?;
    Ok(ApiResponse::success(json!({
        "id": principal.user_id,
        "username": principal.username,
        "role": principal.role,
        "name": principal.name,
    })))
}
