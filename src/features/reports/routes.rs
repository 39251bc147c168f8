use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::reports::dtos::MAX_SUBMISSION_BODY_SIZE;
use crate::features::reports::handlers::{
    delete_report, get_report, list_reports, submit_report,
};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/reports/submit",
            post(submit_report).layer(DefaultBodyLimit::max(MAX_SUBMISSION_BODY_SIZE)),
        )
        .route("/reports", get(list_reports))
        .route("/reports/{id}", get(get_report).delete(delete_report))
        .with_state(report_service)
}
