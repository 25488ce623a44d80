//! Minimal admin page-shell endpoints. The route gate in
//! `middleware::gate` wraps these; the actual admin UI is a separate
//! frontend that talks to /api/admin/*.

use axum::response::Json;
use serde_json::{json, Value};

/// GET /admin - reachable only with a valid session
pub async fn dashboard() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "Clinic CMS Admin",
            "endpoints": {
                "content": "/api/admin/content/:collection[/:id] (write)",
                "bookings": "/api/admin/bookings[/:id] (read/write)",
                "users": "/api/admin/users[/:id] (manage_users)",
                "settings": "/api/admin/settings (manage_settings)",
            }
        }
    }))
}

/// GET /admin/login - reachable only without a valid session
pub async fn login_page() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "login": "POST /api/auth/login with {username, password}",
        }
    }))
}
