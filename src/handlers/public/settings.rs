use axum::extract::State;

use crate::handlers::SETTINGS_OBJECT;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::SiteSettings;
use crate::state::AppState;

/// GET /api/settings - public singleton read
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<SiteSettings> {
    let settings: SiteSettings = state.store.object(SETTINGS_OBJECT)?.unwrap_or_default();
    Ok(ApiResponse::success(settings))
}
