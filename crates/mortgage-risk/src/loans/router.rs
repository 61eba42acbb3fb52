use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{LoanId, LoanSubmission};
use super::rating::RatingGrade;
use super::repository::{LoanRatingView, LoanRepository, RepositoryError};
use super::service::{LoanService, LoanServiceError};

/// Acknowledgement returned by create and update.
#[derive(Debug, Clone, Serialize)]
pub struct LoanMutationResponse {
    pub message: &'static str,
    pub mortgage_id: LoanId,
    pub individual_risk_score: i32,
    pub credit_rating: RatingGrade,
}

impl LoanMutationResponse {
    fn new(message: &'static str, view: &LoanRatingView) -> Self {
        Self {
            message,
            mortgage_id: view.id,
            individual_risk_score: view.individual_risk_score,
            credit_rating: view.credit_rating,
        }
    }
}

/// Router builder exposing the mortgage CRUD and rating endpoints.
pub fn loan_router<R>(service: Arc<LoanService<R>>) -> Router
where
    R: LoanRepository + 'static,
{
    Router::new()
        .route(
            "/mortgages",
            post(create_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/mortgages/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<LoanService<R>>>,
    axum::Json(submission): axum::Json<LoanSubmission>,
) -> Response
where
    R: LoanRepository + 'static,
{
    match service.create(submission) {
        Ok(view) => {
            let body = LoanMutationResponse::new("Mortgage created successfully", &view);
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<LoanService<R>>>) -> Response
where
    R: LoanRepository + 'static,
{
    match service.list() {
        Ok(portfolio) => (StatusCode::OK, axum::Json(portfolio)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<LoanService<R>>>,
    Path(id): Path<u64>,
) -> Response
where
    R: LoanRepository + 'static,
{
    match service.get(LoanId(id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<LoanService<R>>>,
    Path(id): Path<u64>,
    axum::Json(submission): axum::Json<LoanSubmission>,
) -> Response
where
    R: LoanRepository + 'static,
{
    match service.update(LoanId(id), submission) {
        Ok(view) => {
            let body = LoanMutationResponse::new("Mortgage updated successfully", &view);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<LoanService<R>>>,
    Path(id): Path<u64>,
) -> Response
where
    R: LoanRepository + 'static,
{
    match service.delete(LoanId(id)) {
        Ok(()) => {
            let payload = json!({ "message": "Mortgage deleted successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: LoanServiceError) -> Response {
    let status = match &error {
        LoanServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LoanServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        LoanServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
