use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for citizen user accounts
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register_user))
        .route("/api/auth/login", post(handlers::login_user))
        .with_state(service)
}
