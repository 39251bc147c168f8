use axum::body::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportType};

/// Multipart field carrying report images
pub const IMAGES_FIELD: &str = "images";

/// Maximum number of images attached to one report
pub const MAX_IMAGES_PER_REPORT: usize = 5;

/// Maximum size of a single image in bytes (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Body limit for the submit route: all images plus room for multipart framing and text fields
pub const MAX_SUBMISSION_BODY_SIZE: usize = MAX_IMAGES_PER_REPORT * MAX_IMAGE_SIZE + 1024 * 1024;

/// Only `image/*` uploads are accepted.
///
/// Parameters such as `; charset=` are ignored and the comparison is case-insensitive.
pub fn is_acceptable_media_type(declared: &str) -> bool {
    let essence = declared.split(';').next().unwrap_or("").trim();
    match essence.split_once('/') {
        Some((kind, subtype)) => kind.eq_ignore_ascii_case("image") && !subtype.trim().is_empty(),
        None => false,
    }
}

/// One uploaded image, fully buffered but not yet stored
#[derive(Debug, Clone)]
pub struct IncomingImage {
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Check a whole batch before anything is written.
///
/// Fails on the first offending image so no partial batch ever reaches the store.
pub fn validate_images(images: &[IncomingImage]) -> Result<()> {
    if images.len() > MAX_IMAGES_PER_REPORT {
        warn!(
            "Rejected submission with {} images (maximum {})",
            images.len(),
            MAX_IMAGES_PER_REPORT
        );
        return Err(too_many_images());
    }

    for image in images {
        let size = image.data.len();
        if size > MAX_IMAGE_SIZE {
            warn!(
                "Rejected image '{}' ({}, {} bytes): too large",
                image.original_name, image.content_type, size
            );
            return Err(image_too_large(&image.original_name));
        }
        if !is_acceptable_media_type(&image.content_type) {
            warn!(
                "Rejected image '{}' ({}, {} bytes): not an image",
                image.original_name, image.content_type, size
            );
            return Err(not_an_image(&image.original_name, &image.content_type));
        }
        info!(
            "Accepted image '{}' ({}, {} bytes)",
            image.original_name, image.content_type, size
        );
    }

    Ok(())
}

pub fn too_many_images() -> AppError {
    AppError::BadRequest(format!(
        "Too many files. Maximum is {} images per report",
        MAX_IMAGES_PER_REPORT
    ))
}

pub fn image_too_large(original_name: &str) -> AppError {
    AppError::BadRequest(format!(
        "File '{}' is too large. Maximum size is {} MB",
        original_name,
        MAX_IMAGE_SIZE / 1024 / 1024
    ))
}

pub fn not_an_image(original_name: &str, content_type: &str) -> AppError {
    AppError::BadRequest(format!(
        "Only images are allowed: '{}' has type '{}'",
        original_name, content_type
    ))
}

/// Raw multipart submission as read off the wire
#[derive(Debug, Default)]
pub struct ReportSubmissionForm {
    pub report_type: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub images: Vec<IncomingImage>,
}

/// Submission that passed every check and may be stored
#[derive(Debug, Clone)]
pub struct ReportSubmission {
    pub report_type: ReportType,
    pub location: String,
    pub description: String,
    pub images: Vec<IncomingImage>,
}

impl ReportSubmissionForm {
    /// Validate text fields and images together, before any storage happens
    pub fn into_submission(self) -> Result<ReportSubmission> {
        let (report_type, location, description) =
            match (self.report_type, self.location, self.description) {
                (Some(t), Some(l), Some(d))
                    if !t.trim().is_empty() && !l.trim().is_empty() && !d.trim().is_empty() =>
                {
                    (t, l, d)
                }
                _ => {
                    return Err(AppError::Validation(
                        "All fields are required".to_string(),
                    ))
                }
            };

        let report_type = report_type
            .parse::<ReportType>()
            .map_err(AppError::Validation)?;

        validate_images(&self.images)?;

        Ok(ReportSubmission {
            report_type,
            location,
            description,
            images: self.images,
        })
    }
}

/// Submit report request for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SubmitReportDto {
    /// "Damage Assessment", "Resource Needs" or "General Incident"
    #[schema(example = "Damage Assessment")]
    pub r#type: String,
    #[schema(example = "Ward 7, near the river bridge")]
    pub location: String,
    pub description: String,
    /// Up to 5 image files (`image/*`), 5MB each
    pub images: Vec<String>,
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub location: String,
    pub description: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            report_type: r.report_type,
            location: r.location,
            description: r.description,
            images: r.images,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportCreatedResponseDto {
    pub message: String,
    pub report: ReportResponseDto,
}

/// Deletion acknowledgement with per-file cleanup counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDeletedResponseDto {
    pub message: String,
    pub removed_images: usize,
    pub missing_images: usize,
    pub failed_images: usize,
}
