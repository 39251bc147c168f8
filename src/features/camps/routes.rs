use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::camps::handlers;
use crate::features::camps::services::CampService;

/// Create routes for the camps feature
pub fn routes(service: Arc<CampService>) -> Router {
    Router::new()
        .route("/camps/add", post(handlers::add_camp))
        .route("/camps", get(handlers::list_camps))
        .route("/camps/{id}", delete(handlers::delete_camp))
        .with_state(service)
}
