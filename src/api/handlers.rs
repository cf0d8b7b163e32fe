//! HTTP request handlers for the payroll document API.
//!
//! Every handler tags its log lines with a fresh `correlation_id` and
//! answers errors with the JSON body described in [`ApiError`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::DocumentRequest;

use super::request::{
    EmployeeRequest, GenerateDocumentRequest, SalaryCalculationRequest, validate_employee,
};
use super::response::{ApiError, ApiErrorResponse, MessageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/documents/employee", post(create_employee_handler))
        .route("/api/documents/employees", get(list_employees_handler))
        .route(
            "/api/documents/employee/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route(
            "/api/documents/employee/:id/documents",
            get(list_documents_handler),
        )
        .route("/api/documents/generate", post(generate_handler))
        .route("/api/salary/calculate", post(calculate_salary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_failure(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Maps a body that failed to deserialize onto a 400.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Carries serde's message, e.g. "missing field `name`".
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn path_rejection(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Invalid employee id in path"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(format!(
        "Invalid employee id: {}",
        body_text
    )))
    .into_response()
}

/// Handler for POST /api/documents/employee.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");

    let details = match payload {
        Ok(Json(details)) => details,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    if let Err(err) = validate_employee(&details) {
        return engine_failure(correlation_id, err);
    }

    let employee = state
        .service()
        .employees()
        .insert(details.into_employee(Utc::now()));

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Employee created"
    );
    json_response(StatusCode::OK, employee)
}

/// Handler for GET /api/documents/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let employees = state.service().employees().list();
    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Listed employees"
    );
    json_response(StatusCode::OK, employees)
}

/// Handler for GET /api/documents/employee/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };

    match state.service().employees().get(id) {
        Some(employee) => json_response(StatusCode::OK, employee),
        None => engine_failure(correlation_id, EngineError::EmployeeNotFound { employee_id: id }),
    }
}

/// Handler for PUT /api/documents/employee/:id.
///
/// Replaces every editable field; the id and creation time are kept.
async fn update_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Updating employee");

    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };
    let details = match payload {
        Ok(Json(details)) => details,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    if let Err(err) = validate_employee(&details) {
        return engine_failure(correlation_id, err);
    }

    let directory = state.service().employees();
    let Some(mut employee) = directory.get(id) else {
        return engine_failure(correlation_id, EngineError::EmployeeNotFound { employee_id: id });
    };
    details.apply_to(&mut employee);

    match directory.update(employee) {
        Ok(updated) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %updated.id,
                "Employee updated"
            );
            json_response(StatusCode::OK, updated)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for DELETE /api/documents/employee/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };

    match state.service().employees().remove(id) {
        Ok(_) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                "Employee deleted"
            );
            json_response(
                StatusCode::OK,
                MessageResponse::new("Employee deleted successfully"),
            )
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for GET /api/documents/employee/:id/documents.
///
/// Lists generation records without their bytes.
async fn list_documents_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return path_rejection(correlation_id, rejection),
    };

    if state.service().employees().get(id).is_none() {
        return engine_failure(correlation_id, EngineError::EmployeeNotFound { employee_id: id });
    }
    json_response(StatusCode::OK, state.service().documents().list_for(id))
}

/// Handler for POST /api/documents/generate.
///
/// Responds with the PDF itself as an attachment.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateDocumentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing document request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    if let Err(err) = request.validate() {
        return engine_failure(correlation_id, err);
    }
    let request: DocumentRequest = request.into();
    let employee_id = request.employee_id;

    let start_time = Instant::now();
    let service = state.service().clone();
    let outcome =
        tokio::task::spawn_blocking(move || service.generate(&request, Utc::now())).await;

    let rendered = match outcome {
        Ok(Ok(rendered)) => rendered,
        Ok(Err(err)) => return engine_failure(correlation_id, err),
        Err(join_error) => {
            let err = EngineError::RenderError {
                message: join_error.to_string(),
            };
            return engine_failure(correlation_id, err);
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        document_type = %rendered.document_type,
        size = rendered.bytes.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Document generated successfully"
    );

    let disposition = format!("attachment; filename=\"{}\"", rendered.file_name);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, rendered.media_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response()
}

/// Handler for POST /api/salary/calculate.
///
/// Returns the breakup together with its audit steps.
async fn calculate_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };
    if let Err(err) = request.validate() {
        return engine_failure(correlation_id, err);
    }

    let start_time = Instant::now();
    let calculation = state
        .service()
        .renderer()
        .calculator()
        .calculate_with_audit(request.monthly_ctc, Some(&request.overrides));

    info!(
        correlation_id = %correlation_id,
        monthly_ctc = %calculation.breakup.monthly_ctc,
        steps = calculation.audit_steps.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Salary calculation completed"
    );
    json_response(StatusCode::OK, calculation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Asset, AssetStore};
    use crate::config::ConfigLoader;
    use crate::models::SalaryCalculation;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct NoAssets;

    impl AssetStore for NoAssets {
        fn resolve(&self, _name: &str) -> Asset {
            Asset::Absent
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        AppState::new(config, Arc::new(NoAssets))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_salary_calculate_returns_breakup_and_audit() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/api/salary/calculate",
                r#"{"monthly_ctc": "50000", "hra": "10000", "basic": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: SalaryCalculation = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.breakup.basic, dec("25000"));
        assert_eq!(result.breakup.hra, dec("10000"));
        assert_eq!(result.breakup.special_allowance, dec("13400"));
        assert!(result.audit_steps.iter().any(|s| s.rule_id == "salary_override"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/api/salary/calculate", "{invalid json"))
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
    async fn test_missing_field_is_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/api/salary/calculate", r#"{"hra": "9000"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("monthly_ctc"));
    }

    #[tokio::test]
    async fn test_bad_path_id_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/documents/employee/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
