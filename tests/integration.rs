//! Integration tests for the Attendance and Payroll Engine API.
//!
//! This test suite drives the router end to end and covers:
//! - Employee registration, lookup, listing, and deletion
//! - Validation and duplicate-id rejection
//! - Attendance marking, sequence assignment, and filtering
//! - Partial updates and deletion of attendance records
//! - Salary calculation under the Loss-of-Pay policy
//! - CSV export column contract
//! - Analytics aggregation
//! - Error status mapping

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::models::{AttendanceRecord, Employee, SalaryDetails};
use attendance_engine::store::MemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(Arc::new(MemoryStore::new())))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn add_employee(router: &Router, id: &str, name: &str, salary: u64) -> Employee {
    let (status, body) = send(
        router.clone(),
        "POST",
        "/employees",
        Some(json!({ "id": id, "name": name, "salary": salary })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&body).unwrap()
}

/// Marks an absence, which the cutoff rule can never override, so the
/// resulting record shape is independent of the wall clock.
async fn mark_absent(router: &Router, employee_id: &str) -> AttendanceRecord {
    let (status, body) = send(
        router.clone(),
        "POST",
        "/attendance",
        Some(json!({ "employee_id": employee_id, "present": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&body).unwrap()
}

fn error_code(body: &[u8]) -> String {
    let value: Value = serde_json::from_slice(body).unwrap();
    value["code"].as_str().unwrap().to_string()
}

// =============================================================================
// Employee CRUD
// =============================================================================

#[tokio::test]
async fn test_add_employee_returns_stored_employee() {
    let router = create_router_for_test();

    let employee = add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    assert_eq!(employee.id, "emp_001");
    assert_eq!(employee.name, "Asha Rao");
    assert_eq!(employee.salary, decimal("30000"));
}

#[tokio::test]
async fn test_list_employees_is_sorted_by_name() {
    let router = create_router_for_test();
    add_employee(&router, "emp_002", "Dev Menon", 25_000).await;
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let (status, body) = send(router, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);

    let employees: Vec<Employee> = serde_json::from_slice(&body).unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].name, "Asha Rao");
    assert_eq!(employees[1].name, "Dev Menon");
}

#[tokio::test]
async fn test_get_employee_by_id() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let (status, body) = send(router, "GET", "/employees/emp_001", None).await;
    assert_eq!(status, StatusCode::OK);

    let employee: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(employee.name, "Asha Rao");
}

#[tokio::test]
async fn test_get_unknown_employee_returns_404() {
    let router = create_router_for_test();

    let (status, body) = send(router, "GET", "/employees/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_employee_removes_it_from_listing() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let (status, _) = send(router.clone(), "DELETE", "/employees/emp_001", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(router, "GET", "/employees", None).await;
    let employees: Vec<Employee> = serde_json::from_slice(&body).unwrap();
    assert!(employees.is_empty());
}

// =============================================================================
// Employee validation
// =============================================================================

#[tokio::test]
async fn test_blank_employee_id_returns_400() {
    let router = create_router_for_test();

    let (status, body) = send(
        router,
        "POST",
        "/employees",
        Some(json!({ "id": "   ", "name": "Asha Rao", "salary": 30000 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_blank_employee_name_returns_400() {
    let router = create_router_for_test();

    let (status, body) = send(
        router,
        "POST",
        "/employees",
        Some(json!({ "id": "emp_001", "name": "", "salary": 30000 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_employee_id_returns_400_and_keeps_original() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let (status, body) = send(
        router.clone(),
        "POST",
        "/employees",
        Some(json!({ "id": "emp_001", "name": "Dev Menon", "salary": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "DUPLICATE_EMPLOYEE");

    let (_, body) = send(router, "GET", "/employees/emp_001", None).await;
    let employee: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(employee.name, "Asha Rao");
}

#[tokio::test]
async fn test_missing_field_returns_400() {
    let router = create_router_for_test();

    let (status, body) = send(
        router,
        "POST",
        "/employees",
        Some(json!({ "name": "Asha Rao" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

// =============================================================================
// Attendance marking
// =============================================================================

#[tokio::test]
async fn test_marked_record_satisfies_flag_invariant() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let record = mark_absent(&router, "emp_001").await;

    // Exactly one of present/absent, and time only for present records.
    assert_ne!(record.is_present(), record.is_absent());
    assert_eq!(record.time.is_empty(), !record.is_present());
    assert!(!record.date.is_empty());
    assert_eq!(record.employee_name, "Asha Rao");
    assert_eq!(record.late, "");
}

#[tokio::test]
async fn test_marking_assigns_sequential_sno_and_id() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let first = mark_absent(&router, "emp_001").await;
    let second = mark_absent(&router, "emp_001").await;

    assert_eq!(first.sno, 1);
    assert_eq!(first.id, Some(1));
    assert_eq!(second.sno, 2);
    assert_eq!(second.id, Some(2));
}

#[tokio::test]
async fn test_sno_is_max_based_after_deletion() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let first = mark_absent(&router, "emp_001").await;
    mark_absent(&router, "emp_001").await;

    let (status, _) = send(
        router.clone(),
        "DELETE",
        &format!("/attendance/{}", first.id.unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Two records existed with snos {1, 2}; record 1 was deleted. The next
    // sno is still max+1 = 3, not count-based.
    let third = mark_absent(&router, "emp_001").await;
    assert_eq!(third.sno, 3);
}

#[tokio::test]
async fn test_sno_follows_the_log_maximum_across_gaps() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    mark_absent(&router, "emp_001").await;
    let second = mark_absent(&router, "emp_001").await;

    // Renumber the second record to 5, leaving snos {1, 5} in the log.
    let (status, _) = send(
        router.clone(),
        "PATCH",
        &format!("/attendance/{}", second.id.unwrap()),
        Some(json!({ "sno": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let next = mark_absent(&router, "emp_001").await;
    assert_eq!(next.sno, 6);
}

#[tokio::test]
async fn test_marking_unknown_employee_leaves_log_empty() {
    let router = create_router_for_test();

    let (status, body) = send(
        router.clone(),
        "POST",
        "/attendance",
        Some(json!({ "employee_id": "ghost", "present": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "EMPLOYEE_NOT_FOUND");

    let (_, body) = send(router, "GET", "/attendance", None).await;
    let records: Vec<AttendanceRecord> = serde_json::from_slice(&body).unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_attendance_filters_by_employee_and_date() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    add_employee(&router, "emp_002", "Dev Menon", 25_000).await;

    mark_absent(&router, "emp_001").await;
    let record = mark_absent(&router, "emp_002").await;

    let (_, body) = send(router.clone(), "GET", "/attendance?employee_id=emp_001", None).await;
    let records: Vec<AttendanceRecord> = serde_json::from_slice(&body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, "emp_001");

    let (_, body) = send(
        router.clone(),
        "GET",
        &format!("/attendance?date={}", record.date),
        None,
    )
    .await;
    let records: Vec<AttendanceRecord> = serde_json::from_slice(&body).unwrap();
    assert_eq!(records.len(), 2);

    let (_, body) = send(router, "GET", "/attendance?date=01-01-2000", None).await;
    let records: Vec<AttendanceRecord> = serde_json::from_slice(&body).unwrap();
    assert!(records.is_empty());
}

// =============================================================================
// Attendance updates
// =============================================================================

#[tokio::test]
async fn test_patch_sets_late_flag_and_preserves_id() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    let record = mark_absent(&router, "emp_001").await;

    let (status, body) = send(
        router,
        "PATCH",
        &format!("/attendance/{}", record.id.unwrap()),
        Some(json!({ "late": "Yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let updated: AttendanceRecord = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, record.id);
    assert!(updated.is_late());
    assert_eq!(updated.sno, record.sno);
    assert_eq!(updated.date, record.date);
}

#[tokio::test]
async fn test_patch_unknown_record_returns_404() {
    let router = create_router_for_test();

    let (status, body) = send(
        router,
        "PATCH",
        "/attendance/99",
        Some(json!({ "late": "Yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "RECORD_NOT_FOUND");
}

// =============================================================================
// Salary calculation
// =============================================================================

#[tokio::test]
async fn test_salary_with_no_absences_is_the_full_base() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;

    let (status, body) = send(router, "GET", "/employees/emp_001/salary", None).await;
    assert_eq!(status, StatusCode::OK);

    let details: SalaryDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(details.base_salary, decimal("30000"));
    assert_eq!(details.daily_salary, decimal("1000"));
    assert_eq!(details.total_leaves, 0);
    assert_eq!(details.lop_days, 0);
    assert_eq!(details.payable_salary, decimal("30000"));
}

#[tokio::test]
async fn test_salary_with_three_absences_has_no_deduction() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    for _ in 0..3 {
        mark_absent(&router, "emp_001").await;
    }

    let (_, body) = send(router, "GET", "/employees/emp_001/salary", None).await;
    let details: SalaryDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(details.total_leaves, 3);
    assert_eq!(details.lop_days, 0);
    assert_eq!(details.payable_salary, decimal("30000"));
}

#[tokio::test]
async fn test_salary_with_five_absences_deducts_two_days() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    for _ in 0..5 {
        mark_absent(&router, "emp_001").await;
    }

    let (_, body) = send(router, "GET", "/employees/emp_001/salary", None).await;
    let details: SalaryDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(details.total_leaves, 5);
    assert_eq!(details.lop_days, 2);
    assert_eq!(details.deduction_amount, decimal("2000"));
    assert_eq!(details.payable_salary, decimal("28000"));
}

#[tokio::test]
async fn test_salary_only_counts_the_requested_employee() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    add_employee(&router, "emp_002", "Dev Menon", 25_000).await;

    for _ in 0..4 {
        mark_absent(&router, "emp_002").await;
    }

    let (_, body) = send(router, "GET", "/employees/emp_001/salary", None).await;
    let details: SalaryDetails = serde_json::from_slice(&body).unwrap();
    assert_eq!(details.total_leaves, 0);
    assert_eq!(details.payable_salary, decimal("30000"));
}

#[tokio::test]
async fn test_salary_for_unknown_employee_returns_404() {
    let router = create_router_for_test();

    let (status, body) = send(router, "GET", "/employees/ghost/salary", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn test_export_emits_contract_columns() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    mark_absent(&router, "emp_001").await;

    let (status, body) = send(router, "GET", "/attendance/export", None).await;
    assert_eq!(status, StatusCode::OK);

    let csv = String::from_utf8(body).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "S.NO,Employee ID,Employee Name,Absentees,Present,Time"
    );

    let row = lines.next().unwrap();
    assert_eq!(row, "1,emp_001,Asha Rao,Yes,,");
}

// =============================================================================
// Analytics
// =============================================================================

#[tokio::test]
async fn test_analytics_counts_absences() {
    let router = create_router_for_test();
    add_employee(&router, "emp_001", "Asha Rao", 30_000).await;
    add_employee(&router, "emp_002", "Dev Menon", 25_000).await;

    mark_absent(&router, "emp_001").await;
    mark_absent(&router, "emp_002").await;

    let (status, body) = send(router, "GET", "/analytics", None).await;
    assert_eq!(status, StatusCode::OK);

    let analytics: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(analytics["totals"]["absent"], 2);
    assert_eq!(analytics["totals"]["late"], 0);

    // Both marks landed on the same wall-clock day.
    let daily = analytics["daily"].as_array().unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0]["absent"], 2);
}

#[tokio::test]
async fn test_analytics_of_empty_log() {
    let router = create_router_for_test();

    let (status, body) = send(router, "GET", "/analytics", None).await;
    assert_eq!(status, StatusCode::OK);

    let analytics: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(analytics["totals"]["present"], 0);
    assert_eq!(analytics["totals"]["absent"], 0);
    assert!(analytics["daily"].as_array().unwrap().is_empty());
}
