use axum::extract::{Path, State};
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::ContentCollection;
use crate::state::AppState;

pub(crate) fn parse_collection(name: &str) -> Result<ContentCollection, ApiError> {
    ContentCollection::parse(name)
        .ok_or_else(|| ApiError::not_found(format!("Unknown collection '{}'", name)))
}

pub(crate) fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// GET /api/content/:collection - public list
pub async fn list_content(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> ApiResult<Vec<Value>> {
    let collection = parse_collection(&collection)?;
    let records: Vec<Value> = state.store.collection(collection.as_str())?;
    Ok(ApiResponse::success(records))
}

/// GET /api/content/:collection/:id - public single record
pub async fn get_content(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<Value> {
    let collection = parse_collection(&collection)?;
    let records: Vec<Value> = state.store.collection(collection.as_str())?;

    records
        .into_iter()
        .find(|record| record_id(record) == Some(id.as_str()))
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("Record not found"))
}
