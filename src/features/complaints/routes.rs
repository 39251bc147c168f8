use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::complaints::handlers;
use crate::features::complaints::services::ComplaintService;

/// Create routes for the complaints feature
pub fn routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route(
            "/complaints",
            get(handlers::list_complaints).post(handlers::create_complaint),
        )
        .route(
            "/complaints/{id}",
            get(handlers::get_complaint)
                .put(handlers::update_complaint_status)
                .delete(handlers::delete_complaint),
        )
        .route("/complaints/{id}/view", patch(handlers::mark_complaint_viewed))
        .with_state(service)
}
