//! HTTP request handlers for the Attendance and Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, patch, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{attendance_totals, calculate_salary, daily_breakdown};
use crate::error::EngineError;
use crate::export::{attendance_csv, export_filename};

use super::request::{
    AddEmployeeRequest, AttendanceQuery, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use super::response::{AnalyticsResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(add_employee).get(list_employees))
        .route("/employees/:id", get(get_employee).delete(delete_employee))
        .route("/employees/:id/salary", get(employee_salary))
        .route("/attendance", post(mark_attendance).get(list_attendance))
        .route("/attendance/export", get(export_attendance))
        .route(
            "/attendance/:id",
            patch(update_attendance).delete(delete_attendance),
        )
        .route("/analytics", get(analytics))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for `POST /employees`.
async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.id,
        "Registering employee"
    );

    match state.store().add_employee(request.into()).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee registration rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /employees`.
async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().employees().await)
}

/// Handler for `GET /employees/{id}`.
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store().employee(&id).await {
        Some(employee) => Json(employee).into_response(),
        None => ApiErrorResponse::from(EngineError::EmployeeNotFound { id }).into_response(),
    }
}

/// Handler for `DELETE /employees/{id}`.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.store().delete_employee(&id).await;
    StatusCode::NO_CONTENT
}

/// Handler for `GET /employees/{id}/salary`.
async fn employee_salary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let Some(employee) = state.store().employee(&id).await else {
        warn!(correlation_id = %correlation_id, employee_id = %id, "Salary requested for unknown employee");
        return ApiErrorResponse::from(EngineError::EmployeeNotFound { id }).into_response();
    };

    let records = state.store().attendance_for_employee(&employee.id).await;
    let details = calculate_salary(employee.salary, &records);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        total_leaves = details.total_leaves,
        lop_days = details.lop_days,
        payable_salary = %details.payable_salary,
        "Salary computed"
    );

    Json(details).into_response()
}

/// Handler for `POST /attendance`.
///
/// Marks attendance at the current local wall-clock moment; the noon cutoff
/// may override the requested presence.
async fn mark_attendance(
    State(state): State<AppState>,
    payload: Result<Json<MarkAttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let now = Local::now().naive_local();

    match state
        .store()
        .mark_attendance(&request.employee_id, request.present, now)
        .await
    {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                sno = record.sno,
                present = record.is_present(),
                "Attendance marked"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Attendance marking failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /attendance`.
async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> impl IntoResponse {
    let records = match (query.employee_id, query.date) {
        (Some(employee_id), _) => state.store().attendance_for_employee(&employee_id).await,
        (None, Some(date)) => state.store().attendance_for_date(&date).await,
        (None, None) => state.store().attendance().await,
    };
    Json(records)
}

/// Handler for `PATCH /attendance/{id}`.
async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<UpdateAttendanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.store().update_attendance(id, request.into()).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                record_id = id,
                error = %err,
                "Attendance update failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `DELETE /attendance/{id}`.
async fn delete_attendance(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    state.store().delete_attendance(id).await;
    StatusCode::NO_CONTENT
}

/// Handler for `GET /attendance/export`.
async fn export_attendance(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.store().attendance().await;

    match attendance_csv(&records) {
        Ok(csv) => {
            let filename = export_filename(Local::now().date_naive());
            (
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /analytics`.
async fn analytics(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.store().attendance().await;

    Json(AnalyticsResponse {
        totals: attendance_totals(&records),
        daily: daily_breakdown(&records),
    })
}
