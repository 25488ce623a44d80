use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers::{admin, public};
use crate::middleware::gate;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Admin API (per-handler authorization)
        .merge(admin_api_routes())
        // Admin page shell behind the route gate
        .merge(admin_page_routes(state.clone()))
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.server.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

fn public_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        // Session lifecycle
        .route("/api/auth/login", post(public::auth::login))
        .route("/api/auth/logout", post(public::auth::logout))
        .route("/api/auth/me", get(public::auth::me))
        // Site content, always public
        .route("/api/content/:collection", get(public::content::list_content))
        .route("/api/content/:collection/:id", get(public::content::get_content))
        .route("/api/settings", get(public::settings::get_settings))
        // Customer-facing booking submission
        .route("/api/bookings", post(public::booking::create_booking))
}

fn admin_api_routes() -> Router<AppState> {
    use axum::routing::{post, put};

    Router::new()
        // Content mutation (write)
        .route("/api/admin/content/:collection", post(admin::content::create_content))
        .route(
            "/api/admin/content/:collection/:id",
            put(admin::content::update_content).delete(admin::content::delete_content),
        )
        // Booking management (read/write)
        .route("/api/admin/bookings", get(admin::bookings::list_bookings))
        .route(
            "/api/admin/bookings/:id",
            get(admin::bookings::get_booking).put(admin::bookings::update_booking),
        )
        // User management (manage_users)
        .route(
            "/api/admin/users",
            get(admin::users::list_users).post(admin::users::create_user),
        )
        .route(
            "/api/admin/users/:id",
            get(admin::users::get_user)
                .put(admin::users::update_user)
                .delete(admin::users::delete_user),
        )
        // Settings (manage_settings)
        .route("/api/admin/settings", put(admin::settings::update_settings))
}

fn admin_page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::pages::dashboard))
        .route("/admin/login", get(admin::pages::login_page))
        .route_layer(middleware::from_fn_with_state(state, gate::admin_gate))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Clinic CMS API",
            "version": version,
            "description": "Bilingual content backend for a multi-branch beauty clinic",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/api/auth/login|logout|me (public - session lifecycle)",
                "content": "/api/content/:collection[/:id] (public reads)",
                "settings": "/api/settings (public read)",
                "bookings": "/api/bookings (public create)",
                "admin": "/api/admin/* (protected - staff only)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match std::fs::create_dir_all(state.store.root()) {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "storage": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "storage unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "storage_error": e.to_string()
                }
            })),
        ),
    }
}
