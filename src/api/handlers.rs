//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_attendance_report;
use crate::models::Employee;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/roster", get(roster_handler))
        .with_state(state)
}

/// Handler for GET /roster.
///
/// Returns the configured employees in declaration order.
async fn roster_handler(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.config().roster().employees().to_vec())
}

/// Handler for POST /report.
///
/// Builds the monthly attendance report for the submitted punch log.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::malformed_json("Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let config = state.config();
    let start_time = Instant::now();
    match build_attendance_report(
        &request.lines,
        config.roster(),
        &request.holidays,
        config.policy(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                month = %report.month.label(),
                lines = request.lines.len(),
                diagnostics = report.diagnostics.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Report built successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report generation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::HolidaySelection;
    use crate::config::ConfigLoader;
    use crate::models::AttendanceReport;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_report(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/report")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let request = ReportRequest {
            lines: vec![
                "2 2024-03-05 09:00:00".to_string(),
                "2 2024-03-05 17:30:00".to_string(),
            ],
            holidays: HolidaySelection::Days(vec![8]),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = router.oneshot(post_report(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: AttendanceReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.cell(2, 5), Some("P"));
        assert_eq!(report.cell(2, 8), Some("H"));
        assert_eq!(report.day_record(2, 5).unwrap().hours.to_string(), "08:30");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_report("{invalid json".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_malformed_json() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/report")
                    .body(Body::from(r#"{"lines": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
        assert!(error.message.contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_missing_lines_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_report(r#"{"holidays": [1]}"#.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("lines"));
    }

    #[tokio::test]
    async fn test_no_dates_returns_422() {
        let router = create_router(create_test_state());

        let body = r#"{"lines": ["", "abc not-a-date"]}"#.to_string();
        let response = router.oneshot(post_report(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPTY_INPUT");
    }

    #[tokio::test]
    async fn test_roster_endpoint_lists_declaration_order() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/roster")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let employees: Vec<Employee> = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            employees,
            vec![Employee::new("John", 1), Employee::new("Eve", 2)]
        );
    }
}
