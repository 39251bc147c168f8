use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::uploads::handlers::serve_upload;
use crate::modules::storage::ContentStore;

/// Static access to stored report images
pub fn routes(store: Arc<dyn ContentStore>) -> Router {
    Router::new()
        .route("/uploads/{filename}", get(serve_upload))
        .with_state(store)
}
