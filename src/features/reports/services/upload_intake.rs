use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::error::Result;
use crate::features::reports::dtos::{validate_images, IncomingImage};
use crate::modules::storage::{extension_of, ContentStore, DeleteOutcome};

/// What happened to one referenced file during cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    Missing,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ImageCleanup {
    pub reference: String,
    pub outcome: CleanupOutcome,
}

/// Turns a validated batch of uploads into stored files.
///
/// A batch is either stored completely or not at all: when a write fails
/// midway, every file already written for the batch is removed again.
#[derive(Clone)]
pub struct UploadIntake {
    store: Arc<dyn ContentStore>,
}

impl UploadIntake {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Store every image in submission order and return their references
    pub async fn store_all(&self, images: Vec<IncomingImage>) -> Result<Vec<String>> {
        validate_images(&images)?;

        let mut references = Vec::with_capacity(images.len());

        for image in images {
            let extension = extension_of(&image.original_name);
            let size = image.data.len();

            match self.store.put(image.data, extension.as_deref()).await {
                Ok(reference) => {
                    info!(
                        "Stored upload '{}' ({} bytes) as {}",
                        image.original_name, size, reference
                    );
                    references.push(reference);
                }
                Err(e) => {
                    error!("Failed to store upload '{}': {}", image.original_name, e);
                    self.discard_all(&references).await;
                    return Err(e.into());
                }
            }
        }

        Ok(references)
    }

    /// Best-effort removal of every reference; never fails as a whole
    pub async fn discard_all(&self, references: &[String]) -> Vec<ImageCleanup> {
        let mut results = Vec::with_capacity(references.len());

        for reference in references {
            let outcome = match self.store.delete(reference).await {
                Ok(DeleteOutcome::Removed) => {
                    info!("Removed stored file {}", reference);
                    CleanupOutcome::Removed
                }
                Ok(DeleteOutcome::Missing) => {
                    warn!("Stored file {} was already gone", reference);
                    CleanupOutcome::Missing
                }
                Err(e) => {
                    error!("Failed to remove stored file {}: {}", reference, e);
                    CleanupOutcome::Failed(e.to_string())
                }
            };

            results.push(ImageCleanup {
                reference: reference.clone(),
                outcome,
            });
        }

        results
    }
}
