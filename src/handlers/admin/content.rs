use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::{authorize, Capability, Session};
use crate::error::ApiError;
use crate::handlers::public::content::{parse_collection, record_id};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::schemas;

/// POST /api/admin/content/:collection - create record (write)
pub async fn create_content(
    State(state): State<AppState>,
    session: Session,
    Path(collection): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    authorize(&session, Capability::Write)?;
    let collection = parse_collection(&collection)?;

    let Value::Object(mut fields) = payload else {
        return Err(ApiError::bad_request("Expected a JSON object"));
    };

    let errors = schemas::content(collection).validate(&Value::Object(fields.clone()));
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    fields.insert("id".to_string(), json!(Uuid::new_v4()));
    fields.insert("created_at".to_string(), json!(Utc::now()));
    let record = Value::Object(fields);

    let mut records: Vec<Value> = state.store.collection(collection.as_str())?;
    records.push(record.clone());
    state.store.replace(collection.as_str(), &records)?;

    Ok(ApiResponse::created(record))
}

/// PUT /api/admin/content/:collection/:id - merge update (write)
///
/// Payload fields are merged onto the existing record; id and created_at
/// are server-owned and never overwritten. The merged record must still
/// satisfy the collection schema.
pub async fn update_content(
    State(state): State<AppState>,
    session: Session,
    Path((collection, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> ApiResult<Value> {
    authorize(&session, Capability::Write)?;
    let collection = parse_collection(&collection)?;

    let Value::Object(fields) = payload else {
        return Err(ApiError::bad_request("Expected a JSON object"));
    };

    let mut records: Vec<Value> = state.store.collection(collection.as_str())?;
    let Some(index) = records
        .iter()
        .position(|record| record_id(record) == Some(id.as_str()))
    else {
        return Err(ApiError::not_found("Record not found"));
    };

    let Some(existing) = records[index].as_object_mut() else {
        return Err(ApiError::internal("An error occurred while processing your request"));
    };
    for (key, value) in fields {
        if key == "id" || key == "created_at" {
            continue;
        }
        existing.insert(key, value);
    }

    let merged = records[index].clone();
    let errors = schemas::content(collection).validate(&merged);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    state.store.replace(collection.as_str(), &records)?;
    Ok(ApiResponse::success(merged))
}

/// DELETE /api/admin/content/:collection/:id (write)
pub async fn delete_content(
    State(state): State<AppState>,
    session: Session,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<()> {
    authorize(&session, Capability::Write)?;
    let collection = parse_collection(&collection)?;

    let mut records: Vec<Value> = state.store.collection(collection.as_str())?;
    let before = records.len();
    records.retain(|record| record_id(record) != Some(id.as_str()));

    if records.len() == before {
        return Err(ApiError::not_found("Record not found"));
    }

    state.store.replace(collection.as_str(), &records)?;
    Ok(ApiResponse::<()>::no_content())
}
