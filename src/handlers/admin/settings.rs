use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::auth::{authorize, Capability, Session};
use crate::error::ApiError;
use crate::handlers::SETTINGS_OBJECT;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::SiteSettings;
use crate::state::AppState;
use crate::validation::schemas;

/// PUT /api/admin/settings (manage_settings)
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> ApiResult<SiteSettings> {
    authorize(&session, Capability::ManageSettings)?;

    let errors = schemas::settings().validate(&payload);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let settings: SiteSettings = serde_json::from_value(payload)
        .map_err(|e| ApiError::bad_request(format!("Malformed settings payload: {}", e)))?;

    state.store.replace_object(SETTINGS_OBJECT, &settings)?;
    Ok(ApiResponse::success(settings))
}
