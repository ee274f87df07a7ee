use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::user::{LoginRequest, LoginResponse},
};

/// Handler for username/password login
pub async fn login(
    State(state): State<AppState>,
    request: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;

    let user = state
        .user_store
        .verify_credentials(&request.username, &request.password)
        .await?;

    tracing::info!("User {} logged in", user.username);

    Ok((StatusCode::OK, Json(LoginResponse::success(user))))
}
