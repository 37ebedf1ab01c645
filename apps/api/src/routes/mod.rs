pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::screening::handlers as screening_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening pipeline
        .route(
            "/api/v1/screenings",
            post(screening_handlers::handle_analyze),
        )
        .route(
            "/api/v1/screenings/current",
            get(screening_handlers::handle_get_results),
        )
        .route(
            "/api/v1/screenings/current/shortlist",
            get(screening_handlers::handle_shortlist),
        )
        .route(
            "/api/v1/candidates/:id/notes",
            patch(screening_handlers::handle_set_note),
        )
        // Export sinks
        .route(
            "/api/v1/screenings/current/export/csv",
            get(export_handlers::handle_export_csv),
        )
        .route(
            "/api/v1/screenings/current/report",
            get(export_handlers::handle_export_report),
        )
        .route("/api/v1/share/qr", get(export_handlers::handle_share_qr))
        // Resume batches can be tens of PDFs; the 2 MB default is too tight
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .with_state(state)
}
