//! Employee route handlers.
//!
//! Each handler performs exactly one logical store operation and maps the
//! outcome to a JSON response. Failures are logged where detected.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use mongodb::bson::oid::ObjectId;

use crate::employee::model::{DeleteOutcome, Employee, EmployeeInput};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::StoreError;

const LIST_FAILED: &str = "failed to list employees";
const BAD_BODY: &str = "failed to read employee data";
const INSERT_FAILED: &str = "failed to add employee";
const BAD_ID: &str = "invalid employee id";
const NOT_FOUND: &str = "employee not found";
const UPDATE_FAILED: &str = "failed to update employee";
const DELETE_FAILED: &str = "failed to delete employee";

fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|e| {
        tracing::error!(id = %raw, error = %e, "{}", BAD_ID);
        ApiError::internal(BAD_ID)
    })
}

fn parse_body(body: &[u8]) -> Result<EmployeeInput, ApiError> {
    EmployeeInput::from_json(body).map_err(|e| {
        tracing::error!(error = %e, "{}", BAD_BODY);
        ApiError::internal(BAD_BODY)
    })
}

/// `GET /employee`
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, "{}", LIST_FAILED);
        ApiError::internal(LIST_FAILED)
    })?;
    Ok(Json(employees))
}

/// `POST /employee`
///
/// The response is re-read from the store after the insert. If that read
/// fails or finds nothing, the submitted fields are returned with the new id.
pub async fn create_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Employee>, ApiError> {
    let input = parse_body(&body)?;

    let id = state.store.insert(input.clone()).await.map_err(|e| {
        tracing::error!(error = %e, "{}", INSERT_FAILED);
        ApiError::internal(INSERT_FAILED)
    })?;

    let created = match state.store.find(id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            tracing::warn!(id = %id, "Inserted employee not visible on re-read");
            input.with_id(id)
        }
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "Re-reading inserted employee failed");
            input.with_id(id)
        }
    };

    tracing::debug!(id = %created.id, "Employee created");
    Ok(Json(created))
}

/// `PUT /employee/{id}`
///
/// Echoes the submitted fields with the path id; the stored document is not re-read.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&raw_id)?;
    let input = parse_body(&body)?;

    match state.store.update(id, input.clone()).await {
        Ok(()) => Ok(Json(input.with_id(id))),
        Err(StoreError::NotFound(_)) => {
            tracing::error!(id = %id, "{}", NOT_FOUND);
            Err(ApiError::not_found(NOT_FOUND))
        }
        Err(e) => {
            tracing::error!(id = %id, error = %e, "{}", UPDATE_FAILED);
            Err(ApiError::internal(UPDATE_FAILED))
        }
    }
}

/// `DELETE /employee/{id}`
///
/// Deleting an unknown id succeeds with `{"DeletedCount": 0}`.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let id = parse_id(&raw_id)?;

    let outcome = state.store.delete(id).await.map_err(|e| {
        tracing::error!(id = %id, error = %e, "{}", DELETE_FAILED);
        ApiError::internal(DELETE_FAILED)
    })?;

    tracing::debug!(id = %id, deleted = outcome.deleted_count, "Employee delete processed");
    Ok(Json(outcome))
}
