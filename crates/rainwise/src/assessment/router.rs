use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AssessmentId, AssessmentInput};
use super::repository::{AssessmentRepository, RepositoryError, ReportNotifier};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing assessment intake, evaluation, and report retrieval.
pub fn assessment_router<R, N>(service: Arc<AssessmentService<R, N>>) -> Router
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    Router::new()
        .route("/api/v1/feasibility", post(compute_handler::<R, N>))
        .route("/api/v1/assessments", post(submit_handler::<R, N>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/evaluate",
            post(evaluate_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/report",
            get(report_handler::<R, N>),
        )
        .with_state(service)
}

/// Stateless computation: nothing is stored.
pub(crate) async fn compute_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(input): axum::Json<AssessmentInput>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    let report = service.engine().compute(&input);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(input): axum::Json<AssessmentInput>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    match service.submit(input) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.summary_view())).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "assessment already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    match service.get(&AssessmentId(assessment_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn evaluate_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    match service.evaluate(&AssessmentId(assessment_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    N: ReportNotifier + 'static,
{
    match service.report(&AssessmentId(assessment_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = match &err {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::ReportPending(_) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | AssessmentServiceError::Notification(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
