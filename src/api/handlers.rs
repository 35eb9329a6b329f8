//! HTTP request handlers for the Attendance Grid Engine API.
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
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_monthly_grid_with_rule, prorate_salary};
use crate::error::EngineError;

use super::request::GridRequest;
use super::response::{ApiError, ApiErrorResponse, GridResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance-grid", post(attendance_grid_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "engine_version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for POST /attendance-grid.
///
/// Accepts a grid request and returns the computed monthly attendance grid.
async fn attendance_grid_handler(
    State(state): State<AppState>,
    payload: Result<Json<GridRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance grid request");

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
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
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

    let start_time = Instant::now();
    match build_grid_response(&request, &state) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = response.employee_id.as_deref().unwrap_or("-"),
                year = request.year,
                month = request.month,
                total_payable = response.grid.total_payable,
                skipped_records = response.skipped_records,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Attendance grid computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance grid calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates the request's records and computes the grid and salary.
fn build_grid_response(
    request: &GridRequest,
    state: &AppState,
) -> Result<GridResponse, EngineError> {
    let month = u32::try_from(request.month).map_err(|_| EngineError::InvalidMonth {
        month: request.month,
    })?;
    let holiday_rule = state.config().holiday_rule();
    let inputs = request.validated_inputs();

    let grid = compute_monthly_grid_with_rule(
        request.year,
        month,
        &inputs.attendance,
        &inputs.leave,
        holiday_rule,
    )?;

    let prorated_salary = request
        .monthly_salary
        .map(|salary| prorate_salary(salary, &grid))
        .transpose()?;

    Ok(GridResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id.clone(),
        holiday_rule,
        grid,
        prorated_salary,
        skipped_records: inputs.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::DayStatus;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_valid_request() -> GridRequest {
        GridRequest {
            employee_id: Some("emp_001".to_string()),
            year: 2025,
            month: 6,
            monthly_salary: None,
            attendance_records: vec![json!({"date": "2025-06-02", "status": "Present"})],
            leave_intervals: vec![json!({
                "start_date": "2025-06-09",
                "end_date": "2025-06-11",
                "status": "Approved"
            })],
        }
    }

    async fn post_json(router: Router, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/attendance-grid")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, body) = post_json(router, body).await;
        assert_eq!(status, StatusCode::OK);

        let result: GridResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.employee_id.as_deref(), Some("emp_001"));
        assert_eq!(result.grid.days.len(), 30);
        assert_eq!(result.grid.total_payable, 4);
        assert_eq!(
            result.grid.status_on(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()),
            Some(DayStatus::Leave)
        );
        assert_eq!(result.prorated_salary, None);
        assert_eq!(result.skipped_records, 0);
    }

    #[tokio::test]
    async fn test_salary_is_prorated() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.monthly_salary = Some(Decimal::from_str("30000.00").unwrap());

        let (status, body) = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(status, StatusCode::OK);

        let result: GridResponse = serde_json::from_slice(&body).unwrap();
        // 4 payable days out of 30
        assert_eq!(result.prorated_salary, Some(Decimal::from_str("4000.00").unwrap()));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_month_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, r#"{"year": 2025}"#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("month"), "got: {}", error.message);
    }

    #[tokio::test]
    async fn test_invalid_month_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.month = 13;

        let (status, body) = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_negative_month_returns_invalid_month() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.month = -1;

        let (status, body) = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_MONTH");
        assert!(error.message.contains("-1"), "got: {}", error.message);
    }

    #[tokio::test]
    async fn test_month_beyond_u32_returns_invalid_month() {
        let router = create_router(create_test_state());
        let body = r#"{"year": 2025, "month": 4294967297}"#.to_string();

        let (status, body) = post_json(router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_engine_errors_are_json_responses() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.month = 0;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/attendance-grid")
                    .header("Content-Type", "application/json")
                    .body(Body::from(serde_json::to_string(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }
}
