use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::volunteers::handlers;
use crate::features::volunteers::services::VolunteerService;

/// Create routes for volunteer team accounts
pub fn routes(service: Arc<VolunteerService>) -> Router {
    Router::new()
        .route("/api/volunteer/register", post(handlers::register_volunteer))
        .route("/api/volunteer/login", post(handlers::login_volunteer))
        .with_state(service)
}
