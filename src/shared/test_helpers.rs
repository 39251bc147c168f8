use std::sync::Arc;

use axum::Router;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;

use crate::features::reports::repositories::InMemoryReportRepository;
use crate::features::reports::ReportService;
use crate::modules::storage::InMemoryContentStore;

/// Report and upload routes wired to in-memory backends
pub struct ReportHarness {
    pub server: TestServer,
    pub repository: Arc<InMemoryReportRepository>,
    pub store: Arc<InMemoryContentStore>,
}

impl ReportHarness {
    pub fn new() -> Self {
        Self::with_backends(
            Arc::new(InMemoryReportRepository::new()),
            Arc::new(InMemoryContentStore::new()),
        )
    }

    pub fn with_backends(
        repository: Arc<InMemoryReportRepository>,
        store: Arc<InMemoryContentStore>,
    ) -> Self {
        let service = Arc::new(ReportService::new(repository.clone(), store.clone()));
        let app = Router::new()
            .merge(crate::features::reports::routes::routes(service))
            .merge(crate::features::uploads::routes::routes(store.clone()));

        Self {
            server: TestServer::new(app).unwrap(),
            repository,
            store,
        }
    }
}

/// A complete text section of a report form
pub fn report_form(report_type: &str, location: &str, description: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("type", report_type.to_string())
        .add_text("location", location.to_string())
        .add_text("description", description.to_string())
}

pub fn file_part(file_name: &str, mime_type: &str, data: Vec<u8>) -> Part {
    Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string())
}

pub fn png_part(file_name: &str) -> Part {
    file_part(file_name, "image/png", b"\x89PNG\r\n\x1a\n".to_vec())
}
