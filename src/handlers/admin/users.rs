use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::auth::permission::Role;
use crate::auth::{authorize, Capability, Session};
use crate::error::ApiError;
use crate::handlers::USERS_COLLECTION;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::{AdminUser, UserView};
use crate::state::AppState;
use crate::validation::schemas;

/// GET /api/admin/users (manage_users)
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Vec<UserView>> {
    authorize(&session, Capability::ManageUsers)?;
    let users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;
    Ok(ApiResponse::success(users.iter().map(UserView::from).collect()))
}

/// GET /api/admin/users/:id (manage_users)
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<UserView> {
    authorize(&session, Capability::ManageUsers)?;
    let users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;

    users
        .iter()
        .find(|u| u.id == id)
        .map(|u| ApiResponse::success(UserView::from(u)))
        .ok_or_else(|| ApiError::not_found("User not found"))
}

/// POST /api/admin/users (manage_users)
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> ApiResult<UserView> {
    authorize(&session, Capability::ManageUsers)?;

    let errors = schemas::user().validate(&payload);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    // Schema validation guarantees these fields are present, non-empty
    // strings with a known role
    let username = payload["username"].as_str().unwrap_or_default().to_string();
    let email = payload["email"].as_str().unwrap_or_default().to_string();
    let password = payload["password"].as_str().unwrap_or_default();
    let name = payload["name"].as_str().unwrap_or_default().to_string();
    let role = payload["role"]
        .as_str()
        .and_then(Role::parse)
        .ok_or_else(|| ApiError::bad_request("Unknown role"))?;

    let mut users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;
    if users.iter().any(|u| u.username == username) {
        return Err(ApiError::conflict("Username already exists"));
    }

    let password_hash = hash_password(password, state.config.security.bcrypt_cost)?;

    let user = AdminUser {
        id: Uuid::new_v4(),
        username,
        email,
        password_hash,
        name,
        role,
        active: true,
        created_at: Utc::now(),
        last_login_at: None,
    };

    let view = UserView::from(&user);
    users.push(user);
    state.store.replace(USERS_COLLECTION, &users)?;

    Ok(ApiResponse::created(view))
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
    /// Optional password rotation
    pub password: Option<String>,
}

/// PUT /api/admin/users/:id (manage_users)
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<UserView> {
    authorize(&session, Capability::ManageUsers)?;

    let mut users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;
    let Some(user) = users.iter_mut().find(|u| u.id == id) else {
        return Err(ApiError::not_found("User not found"));
    };

    if let Some(password) = &body.password {
        if password.chars().count() < 8 {
            let mut errors = BTreeMap::new();
            errors.insert("password".to_string(), "Must be at least 8 characters".to_string());
            return Err(ApiError::validation(errors));
        }
        user.password_hash = hash_password(password, state.config.security.bcrypt_cost)?;
    }
    if let Some(email) = body.email {
        user.email = email;
    }
    if let Some(name) = body.name {
        user.name = name;
    }
    if let Some(role) = body.role {
        user.role = role;
    }
    if let Some(active) = body.active {
        user.active = active;
    }

    let view = UserView::from(&*user);
    state.store.replace(USERS_COLLECTION, &users)?;
    Ok(ApiResponse::success(view))
}

/// DELETE /api/admin/users/:id (manage_users)
///
/// Self-deletion is refused before the store is touched, regardless of role.
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let principal = authorize(&session, Capability::ManageUsers)?;

    if principal.user_id == id {
        return Err(ApiError::forbidden("Cannot delete your own account"));
    }

    let mut users: Vec<AdminUser> = state.store.collection(USERS_COLLECTION)?;
    let before = users.len();
    users.retain(|u| u.id != id);

    if users.len() == before {
        return Err(ApiError::not_found("User not found"));
    }

    state.store.replace(USERS_COLLECTION, &users)?;
    Ok(ApiResponse::<()>::no_content())
}

pub(crate) fn hash_password(password: &str, cost: u32) -> Result<String, ApiError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal("An error occurred while processing your request")
    })
}
