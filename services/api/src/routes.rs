use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mortgage_risk::error::AppError;
use mortgage_risk::loans::{
    assess, loan_router, LoanCsvImporter, LoanRecord, LoanRepository, LoanService,
    LoanSubmission, PoolSummary, RiskAssessment,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioRatingRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) include_loans: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioRatingResponse {
    pub(crate) pool: PoolSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) loans: Option<Vec<RiskAssessment>>,
}

pub(crate) fn with_loan_routes<R>(service: Arc<LoanService<R>>) -> axum::Router
where
    R: LoanRepository + 'static,
{
    loan_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/assessments", axum::routing::post(assessment_endpoint))
        .route(
            "/portfolio/rating",
            axum::routing::post(portfolio_rating_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a loan without storing it.
pub(crate) async fn assessment_endpoint(
    Json(submission): Json<LoanSubmission>,
) -> Result<Json<RiskAssessment>, AppError> {
    let record = LoanRecord::try_from(submission)?;
    Ok(Json(assess(&record)))
}

/// Rate an uploaded CSV portfolio without storing it.
pub(crate) async fn portfolio_rating_endpoint(
    Json(payload): Json<PortfolioRatingRequest>,
) -> Result<Json<PortfolioRatingResponse>, AppError> {
    let PortfolioRatingRequest { csv, include_loans } = payload;

    let records = LoanCsvImporter::from_reader(Cursor::new(csv.into_bytes()))?;
    let assessments: Vec<RiskAssessment> = records.iter().map(assess).collect();
    let pool = PoolSummary::from_assessments(&assessments);
    let loans = if include_loans {
        Some(assessments)
    } else {
        None
    };

    Ok(Json(PortfolioRatingResponse { pool, loans }))
}
