//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::resolution::ShiftStore;

use super::request::{ComputeOvertimeRequest, InvalidateRequest, ResolveShiftRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: ShiftStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/resolve-shift", post(resolve_shift_handler))
        .route("/compute-overtime", post(compute_overtime_handler))
        .route("/invalidate", post(invalidate_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /resolve-shift.
///
/// Resolves the authoritative shift for one employee-day.
async fn resolve_shift_handler<S: ShiftStore + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ResolveShiftRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        force_refresh = request.force_refresh,
        "Resolving shift"
    );

    if request.force_refresh {
        state.engine().invalidate(&request.employee_id, request.date);
    }

    match state.engine().resolve_shift(&request.employee_id, request.date) {
        Ok(resolved) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(resolved),
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Resolution failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /compute-overtime.
///
/// Computes overtime minutes for one attendance pair, resolving the shift
/// for the pair's business day along the way.
async fn compute_overtime_handler<S: ShiftStore + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<ComputeOvertimeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let in_time = request.in_time.with_timezone(&Utc);
    let out_time = request.out_time.map(|t| t.with_timezone(&Utc));

    match state
        .engine()
        .compute_overtime(&request.employee_id, in_time, out_time)
    {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                business_day = %outcome.resolved_shift.shift_date,
                ot_minutes = outcome.minutes,
                "Overtime computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(outcome),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Overtime computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /invalidate.
///
/// Drops the cached resolution for one employee-day. Called by the
/// workflows that edit templates, overrides, leaves, or holidays.
async fn invalidate_handler<S: ShiftStore + 'static>(
    State(state): State<AppState<S>>,
    payload: Result<Json<InvalidateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let existed = state.engine().invalidate(&request.employee_id, request.date);
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        existed,
        "Resolution invalidated"
    );

    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::ShiftEngine;
    use crate::models::{ResolvedShift, ShiftTemplate, ShiftType};
    use crate::store::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let store = Arc::new(MemoryStore::new());
        store.add_template(ShiftTemplate {
            id: "tpl_001".to_string(),
            employee_id: "emp_001".to_string(),
            effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            effective_to: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            shift_type: ShiftType::Morning,
            shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            crosses_midnight: false,
            active: true,
            updated_by: "scheduler_01".to_string(),
            change_reason: None,
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
        });
        let config = EngineConfig {
            utc_offset_minutes: 0,
            ..EngineConfig::default()
        };
        create_router(AppState::new(ShiftEngine::new(config, store)))
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_resolve_returns_200_with_json_body() {
        let response = post_json(
            test_router(),
            "/resolve-shift",
            r#"{"employee_id": "emp_001", "date": "2026-03-14"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let resolved: ResolvedShift = serde_json::from_slice(&body).unwrap();
        assert_eq!(resolved.employee_id, "emp_001");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post_json(test_router(), "/resolve-shift", "{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_validation_error() {
        let response = post_json(test_router(), "/resolve-shift", r#"{"date": "2026-03-14"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_invalidate_returns_204() {
        let response = post_json(
            test_router(),
            "/invalidate",
            r#"{"employee_id": "emp_001", "date": "2026-03-14"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
