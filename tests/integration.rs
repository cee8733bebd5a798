//! Integration tests for the Attendance Engine.
//!
//! This test suite covers the end-to-end scenarios:
//! - Single in/out pair on a working day
//! - Late first punch
//! - Odd punch counts
//! - Employee missing from the log, with holidays and Sundays
//! - Malformed lines mixed with valid ones
//! - The HTTP surface

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::{FixedHolidays, NoHolidays, build_attendance_report};
use attendance_engine::config::{AttendancePolicy, ConfigLoader};
use attendance_engine::error::EngineError;
use attendance_engine::models::{AttendanceReport, DayStatus, Employee, Roster};

// =============================================================================
// Test Helpers
// =============================================================================

fn roster() -> Roster {
    Roster::new(vec![Employee::new("John", 1), Employee::new("Eve", 2)]).unwrap()
}

fn report(lines: &[&str], holidays: &[u32]) -> AttendanceReport {
    build_attendance_report(
        lines,
        &roster(),
        &FixedHolidays(holidays.to_vec()),
        &AttendancePolicy::default(),
    )
    .expect("report should build")
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_report(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Scenario A: single pair on a working day
// =============================================================================

#[test]
fn test_scenario_a_single_pair() {
    let roster = Roster::new(vec![Employee::new("Eve", 1)]).unwrap();
    let lines = ["1 2024-03-05 09:00:00", "1 2024-03-05 17:30:00"];
    let report =
        build_attendance_report(&lines, &roster, &NoHolidays, &AttendancePolicy::default())
            .unwrap();

    let day = report.day_record(1, 5).unwrap();
    assert_eq!(day.hours.to_string(), "08:30");
    assert_eq!(day.status, DayStatus::Present);
    assert!(day.late_flags.is_empty());
    assert_eq!(report.cell(1, 5), Some("P"));
    assert_eq!(report.total_for(1), Some(1));
}

// =============================================================================
// Scenario B: late first punch
// =============================================================================

#[test]
fn test_scenario_b_late_first_punch() {
    let report = report(&["1 2024-03-05 09:10:00", "1 2024-03-05 17:00:00"], &[]);

    let day = report.day_record(1, 5).unwrap();
    assert!(day.is_late(0));
    assert!(!day.is_late(1));
    assert_eq!(day.status, DayStatus::Present);
    assert_eq!(day.hours.to_string(), "07:50");
}

#[test]
fn test_punch_exactly_on_threshold_is_not_late() {
    let report = report(
        &[
            "1 2024-03-05 09:05:00",
            "1 2024-03-05 13:00:00",
            "1 2024-03-05 13:35:00",
            "1 2024-03-05 18:00:00",
        ],
        &[],
    );

    let day = report.day_record(1, 5).unwrap();
    assert!(day.late_flags.is_empty());
    assert_eq!(day.hours.to_string(), "08:20");
}

#[test]
fn test_late_return_from_break() {
    let report = report(
        &[
            "1 2024-03-05 09:00:00",
            "1 2024-03-05 13:00:00",
            "1 2024-03-05 13:50:00",
            "1 2024-03-05 18:00:00",
        ],
        &[],
    );

    let day = report.day_record(1, 5).unwrap();
    assert!(!day.is_late(0));
    assert!(day.is_late(2));
}

// =============================================================================
// Scenario C: odd punch count
// =============================================================================

#[test]
fn test_scenario_c_three_punches() {
    let report = report(
        &[
            "1 2024-03-05 09:00:00",
            "1 2024-03-05 13:00:00",
            "1 2024-03-05 14:00:00",
        ],
        &[],
    );

    let day = report.day_record(1, 5).unwrap();
    assert_eq!(day.hours.to_string(), "N.A.");
    assert_eq!(day.status, DayStatus::Present);
    assert_eq!(report.cell(1, 5), Some("P"));
}

#[test]
fn test_unsorted_punches_pair_after_sorting() {
    let report = report(&["1 2024-03-05 17:30:00", "1 2024-03-05 09:00:00"], &[]);
    let day = report.day_record(1, 5).unwrap();
    assert_eq!(day.hours.to_string(), "08:30");
    assert_eq!(day.punches[0].to_string(), "2024-03-05 09:00:00");
}

// =============================================================================
// Scenario D: employee missing from the log
// =============================================================================

#[test]
fn test_scenario_d_absent_employee() {
    // April 2024 has 30 days; Sundays are 7, 14, 21, 28
    let report = report(&["1 2024-04-02 09:00:00", "1 2024-04-02 17:00:00"], &[10, 25]);
    assert_eq!(report.month.days_in_month, 30);

    let detail = report.detail_for(2).unwrap();
    assert_eq!(detail.days.len(), 30);

    let count = |status: DayStatus| detail.days.iter().filter(|r| r.status == status).count();
    assert_eq!(count(DayStatus::Holiday), 2);
    assert_eq!(count(DayStatus::Unmarked), report.month.sundays.len());
    assert_eq!(count(DayStatus::Unmarked), 4);
    assert_eq!(count(DayStatus::Absent), 24);
    assert_eq!(count(DayStatus::Present), 0);
    assert!(detail.days.iter().all(|r| r.punches.is_empty()));

    assert_eq!(report.total_for(2), Some(0));
    assert_eq!(report.cell(2, 7), Some(""));
    assert_eq!(report.cell(2, 10), Some("H"));
    assert_eq!(report.cell(2, 11), Some("AB"));
}

#[test]
fn test_holiday_on_sunday_is_holiday() {
    // 2024-04-07 is a Sunday
    let report = report(&["1 2024-04-02 09:00:00"], &[7]);
    for id in [1, 2] {
        assert_eq!(report.day_record(id, 7).unwrap().status, DayStatus::Holiday);
        assert_eq!(report.cell(id, 7), Some("H"));
    }
}

#[test]
fn test_sunday_work_counts_toward_total() {
    let report = report(
        &[
            "1 2024-04-07 10:00:00",
            "1 2024-04-07 14:00:00",
            "1 2024-04-08 09:00:00",
            "1 2024-04-08 17:00:00",
        ],
        &[],
    );
    assert_eq!(report.cell(1, 7), Some("P"));
    assert_eq!(report.total_for(1), Some(2));
}

#[test]
fn test_totals_equal_present_cells_for_all_employees() {
    let report = report(
        &[
            "1 2024-04-01 09:00:00",
            "1 2024-04-03 09:00:00",
            "2 2024-04-03 09:00:00",
            "2 2024-04-07 09:00:00",
            "2 2024-04-10 09:00:00",
        ],
        &[10],
    );

    for row in &report.grid {
        let present = row.cells.iter().filter(|c| *c == "P").count() as u32;
        assert_eq!(row.total, present, "total mismatch for {}", row.employee.name);
    }
    assert_eq!(report.total_for(2), Some(2));
}

// =============================================================================
// Scenario E: malformed lines
// =============================================================================

#[test]
fn test_scenario_e_malformed_lines_are_skipped() {
    let report = report(
        &[
            "abc not-a-date",
            "1 2024-03-05 09:00:00",
            "abc 2024-03-05 12:00:00",
            "1 2024-03-05 17:30:00",
            "2 2024-03-05 not-a-time",
        ],
        &[],
    );

    // two-token lines are not attendance content and stay silent
    assert_eq!(report.diagnostics.len(), 2);
    assert_eq!(report.diagnostics[0].line_number, 3);
    assert_eq!(report.diagnostics[0].line, "abc 2024-03-05 12:00:00");
    assert_eq!(report.diagnostics[1].line_number, 5);

    let day = report.day_record(1, 5).unwrap();
    assert_eq!(day.hours.to_string(), "08:30");
    assert_eq!(day.status, DayStatus::Present);
    assert_eq!(report.cell(2, 5), Some("AB"));
}

#[test]
fn test_unknown_badges_are_ignored() {
    let report = report(
        &["99 2024-03-05 09:00:00", "1 2024-03-05 09:00:00", "1 2024-03-05 17:00:00"],
        &[],
    );
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.parse_stats.unknown_employee, 1);
    assert!(report.detail_for(99).is_none());
}

#[test]
fn test_no_dates_is_fatal() {
    let result = build_attendance_report(
        &["", "garbage", "abc not-a-date"],
        &roster(),
        &NoHolidays,
        &AttendancePolicy::default(),
    );
    assert!(matches!(result, Err(EngineError::EmptyInput)));
}

#[test]
fn test_grid_and_detail_ordering() {
    let report = report(&["1 2024-03-05 09:00:00"], &[]);
    let grid: Vec<&str> = report.grid.iter().map(|r| r.employee.name.as_str()).collect();
    let details: Vec<&str> = report.details.iter().map(|d| d.employee.name.as_str()).collect();
    assert_eq!(grid, vec!["Eve", "John"]);
    assert_eq!(details, vec!["John", "Eve"]);
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_report_json_shape() {
    let body = json!({
        "lines": ["1 2024-03-05 09:10:00", "1 2024-03-05 17:30:00", "x 2024-03-05 10:00:00"],
        "holidays": "8, 99"
    });

    let (status, result) = post_report(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(result["month"]["year"], 2024);
    assert_eq!(result["month"]["month"], 3);
    assert_eq!(result["month"]["days_in_month"], 31);
    assert_eq!(result["holidays"], json!([8]));

    // grid is alphabetical: Eve, John
    assert_eq!(result["grid"][0]["employee"]["name"], "Eve");
    assert_eq!(result["grid"][1]["cells"][4], "P");
    assert_eq!(result["grid"][1]["cells"][7], "H");
    assert_eq!(result["grid"][1]["total"], 1);

    // details follow the roster: John, Eve
    let day5 = &result["details"][0]["days"][4];
    assert_eq!(day5["day"], 5);
    assert_eq!(day5["hours"], "08:20");
    assert_eq!(day5["status"], "present");
    assert_eq!(day5["late_flags"], json!([0]));
    assert_eq!(result["details"][0]["total_worked_hours"], "8.33");

    assert_eq!(result["diagnostics"][0]["line_number"], 3);
    assert_eq!(result["day_totals"][4], 1);
}

#[tokio::test]
async fn test_api_empty_input_returns_422() {
    let (status, result) =
        post_report(create_router_for_test(), json!({ "lines": ["abc not-a-date"] })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "EMPTY_INPUT");
}

#[tokio::test]
async fn test_api_wrong_holiday_type_returns_400() {
    let (status, result) = post_report(
        create_router_for_test(),
        json!({ "lines": ["1 2024-03-05 09:00:00"], "holidays": {"day": 1} }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}
