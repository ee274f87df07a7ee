pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;


use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Build the HTTP router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Workforce report server is running." }))
        .route(
            "/reports",
            get(handlers::report::get_all_reports).post(handlers::report::save_report),
        )
        .route("/reports/recent", get(handlers::report::get_recent_reports))
        .route("/reports/export", get(handlers::export::export_reports))
        .route("/reports/date/{date}", get(handlers::report::get_reports_by_date))
        .route(
            "/reports/department/{department}",
            get(handlers::report::get_reports_by_department),
        )
        .route("/departments", get(handlers::report::get_departments))
        .route("/login", post(handlers::auth::login))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
