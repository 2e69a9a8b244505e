use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Note: This feature is public (no authentication required); submissions
/// and browsing are open to the whole community.
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            post(handlers::create_report).get(handlers::list_reports),
        )
        .with_state(service)
}
