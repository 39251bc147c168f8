use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::ReportSubmission;
use crate::features::reports::models::{NewReport, Report, ReportType};
use crate::features::reports::repositories::ReportRepository;
use crate::modules::storage::ContentStore;

use super::upload_intake::{CleanupOutcome, ImageCleanup, UploadIntake};

/// Per-file outcomes of a cascade delete
#[derive(Debug, Clone)]
pub struct ReportDeletion {
    pub cleanup: Vec<ImageCleanup>,
}

impl ReportDeletion {
    pub fn count(&self, matches: impl Fn(&CleanupOutcome) -> bool) -> usize {
        self.cleanup.iter().filter(|c| matches(&c.outcome)).count()
    }
}

/// Service for report operations
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    intake: UploadIntake,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>, store: Arc<dyn ContentStore>) -> Self {
        Self {
            repository,
            intake: UploadIntake::new(store),
        }
    }

    /// Store the submission's images, then persist the report referencing them.
    ///
    /// If the report cannot be persisted the freshly stored files are removed,
    /// so no upload outlives a failed submission.
    pub async fn submit(&self, submission: ReportSubmission) -> Result<Report> {
        let images = self.intake.store_all(submission.images).await?;

        match self
            .create(
                submission.report_type,
                submission.location,
                submission.description,
                images.clone(),
            )
            .await
        {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::warn!(
                    "Report creation failed, discarding {} stored upload(s)",
                    images.len()
                );
                self.intake.discard_all(&images).await;
                Err(e)
            }
        }
    }

    /// Persist a report record
    pub async fn create(
        &self,
        report_type: ReportType,
        location: String,
        description: String,
        images: Vec<String>,
    ) -> Result<Report> {
        if location.trim().is_empty() || description.trim().is_empty() {
            return Err(AppError::Validation("All fields are required".to_string()));
        }

        let report = self
            .repository
            .insert(NewReport {
                id: Uuid::now_v7(),
                report_type,
                location,
                description,
                images,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            "Created report: {} ({}) with {} image(s)",
            report.id,
            report.report_type,
            report.images.len()
        );

        Ok(report)
    }

    /// All reports, newest first
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.repository.list_newest_first().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Report> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))
    }

    /// Remove a report together with every file it references.
    ///
    /// File removal is best effort; the record is deleted even when some
    /// files are already gone or cannot be removed.
    pub async fn delete(&self, id: Uuid) -> Result<ReportDeletion> {
        let report = self.get(id).await?;

        let cleanup = self.intake.discard_all(&report.images).await;
        for entry in &cleanup {
            if let CleanupOutcome::Failed(reason) = &entry.outcome {
                tracing::warn!(
                    "Report {} loses its reference to undeleted file {}: {}",
                    id,
                    entry.reference,
                    reason
                );
            }
        }

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Report not found".to_string()));
        }

        tracing::info!("Deleted report: {}", id);

        Ok(ReportDeletion { cleanup })
    }
}
