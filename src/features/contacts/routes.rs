use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Create routes for the contacts feature
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contacts/add", post(handlers::add_contact))
        .route("/contacts", get(handlers::list_contacts))
        .route(
            "/contacts/{id}",
            get(handlers::get_contact).delete(handlers::delete_contact),
        )
        .with_state(service)
}
