use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    db::report_store::DEFAULT_RECENT_LIMIT,
    error::{AppError, Result},
    handlers::AppState,
    models::{
        department,
        report::{NewReport, ReportPayload, parse_date},
    },
};

/// Query parameters for the recent reports listing
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

/// Get all reports handler
pub async fn get_all_reports(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let reports = state.report_store.list_all().await?;
    Ok((StatusCode::OK, Json(reports)))
}

/// Get recent reports handler
pub async fn get_recent_reports(
    State(state): State<AppState>,
    query: std::result::Result<Query<RecentQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);

    let reports = state.report_store.list_recent(limit).await?;
    Ok((StatusCode::OK, Json(reports)))
}

/// Get reports for a single date handler
pub async fn get_reports_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse> {
    let date = parse_date(&date)?;
    let reports = state.report_store.list_by_date(date).await?;
    Ok((StatusCode::OK, Json(reports)))
}

/// Get reports for a single department handler
pub async fn get_reports_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<impl IntoResponse> {
    let reports = state.report_store.list_by_department(&department).await?;
    Ok((StatusCode::OK, Json(reports)))
}

/// Create or update report handler
pub async fn save_report(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ReportPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let report = NewReport::try_from(payload)?;

    if !department::is_known(&report.department) {
        tracing::warn!("Report submitted for unknown department '{}'", report.department);
    }

    let saved = state.report_store.upsert_report(&report).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// List the department catalogue
pub async fn get_departments() -> impl IntoResponse {
    Json(department::all())
}
