//! Per-route student handlers.
//!
//! Each handler is a stateless async function over one request: decode,
//! validate, call the store, map the result. Failures funnel through
//! [`RollcallError::into_response`]; handlers never recover storage or
//! decode errors beyond translating them.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::info;

use crate::db::models::{Student, StudentInput};
use crate::db::StudentStore;
use crate::error::{RollcallError, StatusResponse};
use crate::router::RollcallState;

#[derive(Debug, Serialize)]
pub struct StudentCreated {
    pub id: i64,
}

pub async fn create_student<S: StudentStore>(
    State(state): State<RollcallState<S>>,
    body: Bytes,
) -> Result<impl IntoResponse, RollcallError> {
    info!("creating new student");

    if body.is_empty() {
        return Err(RollcallError::EmptyBody);
    }
    let input: StudentInput = serde_json::from_slice(&body)?;
    input.validate()?;

    let id = state.storage.create_student(&input).await?;
    info!(id, "student created");

    Ok((StatusCode::CREATED, Json(StudentCreated { id })))
}

pub async fn get_student<S: StudentStore>(
    State(state): State<RollcallState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Student>, RollcallError> {
    info!(id = %id, "getting student by id");

    let id = parse_id(&id)?;
    let student = state.storage.student_by_id(id).await?;
    Ok(Json(student))
}

pub async fn list_students<S: StudentStore>(
    State(state): State<RollcallState<S>>,
) -> Result<Json<Vec<Student>>, RollcallError> {
    info!("listing all students");

    let students = state.storage.students().await?;
    Ok(Json(students))
}

/// Full-record overwrite; validated exactly like create.
pub async fn update_student<S: StudentStore>(
    State(state): State<RollcallState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Student>, RollcallError> {
    info!(id = %id, "updating student by id");

    let id = parse_id(&id)?;
    if body.is_empty() {
        return Err(RollcallError::EmptyBody);
    }
    let input: StudentInput = serde_json::from_slice(&body)?;
    input.validate()?;

    let rows_affected = state.storage.update_student_by_id(id, &input).await?;
    if rows_affected == 0 {
        return Err(RollcallError::StudentNotFound);
    }

    let student = state.storage.student_by_id(id).await?;
    Ok(Json(student))
}

/// Overwrites exactly one field, chosen in priority order name, email, age.
///
/// The update and the refetch are separate statements; an interleaved
/// external write can be observed between them.
pub async fn update_student_field<S: StudentStore>(
    State(state): State<RollcallState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Student>, RollcallError> {
    info!(id = %id, "updating single student field");

    let id = parse_id(&id)?;
    let input: StudentInput = serde_json::from_slice(&body)?;
    let patch = input.single_field().ok_or(RollcallError::NoUpdatableField)?;

    let rows_affected = state.storage.update_student_field_by_id(id, patch).await?;
    if rows_affected == 0 {
        return Err(RollcallError::StudentNotFound);
    }

    let student = state.storage.student_by_id(id).await?;
    Ok(Json(student))
}

pub async fn delete_student<S: StudentStore>(
    State(state): State<RollcallState<S>>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, RollcallError> {
    info!(id = %id, "deleting student by id");

    let id = parse_id(&id)?;
    let rows_affected = state.storage.delete_student_by_id(id).await?;
    if rows_affected == 0 {
        return Err(RollcallError::StudentNotFound);
    }
    info!(id, "student deleted");

    Ok(Json(StatusResponse::ok()))
}

fn parse_id(raw: &str) -> Result<i64, RollcallError> {
    raw.parse::<i64>()
        .map_err(|_| RollcallError::InvalidId(raw.to_string()))
}
