use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::Result,
    handlers::AppState,
    services::export_service::{self, CONTENT_TYPE},
};

/// Export all reports as a spreadsheet attachment
pub async fn export_reports(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let reports = state.report_store.list_all().await?;
    let buffer = export_service::export_reports(&reports)?;

    let file_name = export_service::export_file_name(Utc::now().date_naive());
    let disposition = format!("attachment; filename=\"{}\"", file_name);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
