use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

use super::domain::LeadId;
use super::export::export_filename;
use super::query::LeadQuery;
use super::service::{AnalysisOutcome, LeadService, LeadServiceError};
use super::store::LeadStore;

/// Body accepted by the analyze endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(flatten)]
    outcome: AnalysisOutcome,
}

/// Router builder exposing the lead endpoints.
pub fn lead_router<S>(service: Arc<LeadService<S>>) -> Router
where
    S: LeadStore + 'static,
{
    Router::new()
        .route("/api/analyze", post(analyze_handler::<S>))
        .route("/api/analyze-facebook", post(analyze_handler::<S>))
        .route("/api/leads", get(list_handler::<S>))
        .route("/api/leads/export", get(export_handler::<S>))
        .route("/api/leads/:id", delete(delete_handler::<S>))
        .route("/health", get(health_handler::<S>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<S>(
    State(service): State<Arc<LeadService<S>>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: LeadStore + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        LeadServiceError::InvalidInput(format!(
            "malformed request body: {}",
            rejection.body_text()
        ))
    })?;

    let outcome = service.analyze(request.access_token.as_deref())?;
    let body = AnalyzeResponse {
        success: true,
        outcome,
    };
    Ok((StatusCode::OK, Json(body)).into_response())
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<LeadService<S>>>,
    query: Result<Query<LeadQuery>, QueryRejection>,
) -> Result<Response, AppError>
where
    S: LeadStore + 'static,
{
    let query = lead_query(query)?;
    let page = service.list(&query)?;
    Ok((StatusCode::OK, Json(page)).into_response())
}

pub(crate) async fn export_handler<S>(
    State(service): State<Arc<LeadService<S>>>,
    query: Result<Query<LeadQuery>, QueryRejection>,
) -> Result<Response, AppError>
where
    S: LeadStore + 'static,
{
    let query = lead_query(query)?;
    let mut buffer = Vec::new();
    service.export(&query, &mut buffer)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(Utc::now().date_naive())
    );
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::TEXT_CSV.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    )
        .into_response())
}

pub(crate) async fn delete_handler<S>(
    State(service): State<Arc<LeadService<S>>>,
    Path(id): Path<String>,
) -> Result<Response, AppError>
where
    S: LeadStore + 'static,
{
    service.delete(&LeadId(id))?;
    let payload = json!({
        "success": true,
        "message": "Lead deleted",
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

pub(crate) async fn health_handler<S>(
    State(service): State<Arc<LeadService<S>>>,
) -> Result<Response, AppError>
where
    S: LeadStore + 'static,
{
    let snapshot = service.health()?;
    Ok((StatusCode::OK, Json(snapshot)).into_response())
}

fn lead_query(query: Result<Query<LeadQuery>, QueryRejection>) -> Result<LeadQuery, AppError> {
    let Query(query) = query.map_err(|rejection| {
        LeadServiceError::InvalidInput(format!(
            "malformed query string: {}",
            rejection.body_text()
        ))
    })?;
    Ok(query)
}
