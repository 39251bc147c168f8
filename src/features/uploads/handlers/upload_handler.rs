use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::modules::storage::{content_type_for_name, ContentStore, StorageError};

/// Stored names never change content, so clients may cache them for good
const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Serve a stored upload by its generated name
#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    params(
        ("filename" = String, Path, description = "Generated file name, e.g. 1718000000000-123456789.jpg")
    ),
    responses(
        (status = 200, description = "File contents, typed by extension"),
        (status = 404, description = "File not found")
    ),
    tag = "uploads"
)]
pub async fn serve_upload(
    State(store): State<Arc<dyn ContentStore>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse> {
    let data = match store.get(&filename).await {
        Ok(Some(data)) => data,
        Ok(None) => return Err(AppError::NotFound("File not found".to_string())),
        Err(StorageError::InvalidReference(name)) => {
            debug!("Rejected upload lookup for '{}'", name);
            return Err(AppError::NotFound("File not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type_for_name(&filename)),
            (header::CACHE_CONTROL, IMMUTABLE_CACHE_CONTROL),
        ],
        data,
    ))
}
