use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{
    image_too_large, too_many_images, IncomingImage, ReportCreatedResponseDto,
    ReportDeletedResponseDto, ReportResponseDto, ReportSubmissionForm, SubmitReportDto,
    IMAGES_FIELD, MAX_IMAGES_PER_REPORT, MAX_IMAGE_SIZE, MAX_SUBMISSION_BODY_SIZE,
};
use crate::features::reports::services::{CleanupOutcome, ReportService};
use crate::shared::validation::parse_id;

/// Submit a new incident report
///
/// Accepts multipart/form-data with `type`, `location`, `description` and up
/// to five `images`. Nothing is stored unless the whole submission is valid.
#[utoipa::path(
    post,
    path = "/reports/submit",
    tag = "reports",
    request_body(
        content = SubmitReportDto,
        content_type = "multipart/form-data",
        description = "Report fields plus up to 5 image files",
    ),
    responses(
        (status = 201, description = "Report submitted successfully", body = ReportCreatedResponseDto),
        (status = 400, description = "Missing fields, invalid type or rejected image"),
        (status = 413, description = "Request body too large"),
        (status = 500, description = "Storage or database failure")
    )
)]
pub async fn submit_report(
    State(service): State<Arc<ReportService>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ReportCreatedResponseDto>)> {
    let multipart = multipart.map_err(|e| {
        debug!("Rejected report submission body: {}", e);
        AppError::BadRequest(format!("Expected multipart form data: {}", e))
    })?;

    let submission = read_submission_form(multipart).await?.into_submission()?;
    let report = service.submit(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReportCreatedResponseDto {
            message: "Report submitted successfully".to_string(),
            report: report.into(),
        }),
    ))
}

/// Map a multipart read failure, keeping the body limit distinguishable from malformed input
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Report submission exceeded the body limit: {}", e);
        return AppError::PayloadTooLarge(format!(
            "Request body too large. Maximum is {} MB",
            MAX_SUBMISSION_BODY_SIZE / 1024 / 1024
        ));
    }

    debug!("{}: {}", context, e);
    AppError::BadRequest(format!("{}: {}", context, e))
}

/// Drain the multipart stream into a form, enforcing the per-image limits as bytes arrive
async fn read_submission_form(mut multipart: Multipart) -> Result<ReportSubmissionForm> {
    let mut form = ReportSubmissionForm::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart data", e))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        if let Some(file_name) = field.file_name() {
            // An empty file input still sends a part, with no file name
            if file_name.is_empty() {
                debug!("Skipping empty file part under '{}'", field_name);
                continue;
            }
            if field_name != IMAGES_FIELD {
                return Err(AppError::BadRequest(format!(
                    "Unexpected file field '{}'",
                    field_name
                )));
            }

            let original_name = file_name.to_string();
            if form.images.len() == MAX_IMAGES_PER_REPORT {
                warn!(
                    "Rejected image '{}': more than {} images",
                    original_name, MAX_IMAGES_PER_REPORT
                );
                return Err(too_many_images());
            }

            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let mut data = Vec::new();
            while let Some(chunk) = field
                .chunk()
                .await
                .map_err(|e| multipart_error("Failed to read file data", e))?
            {
                if data.len() + chunk.len() > MAX_IMAGE_SIZE {
                    warn!(
                        "Rejected image '{}' ({}): larger than {} bytes",
                        original_name, content_type, MAX_IMAGE_SIZE
                    );
                    return Err(image_too_large(&original_name));
                }
                data.extend_from_slice(&chunk);
            }

            form.images.push(IncomingImage {
                original_name,
                content_type,
                data: Bytes::from(data),
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| multipart_error(&format!("Failed to read field '{}'", field_name), e))?;

        match field_name.as_str() {
            "type" => form.report_type = Some(value),
            "location" => form.location = Some(value),
            "description" => form.description = Some(value),
            other => debug!("Ignoring unknown report field '{}'", other),
        }
    }

    Ok(form)
}

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<ReportResponseDto>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = service.list().await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID (UUID)")
    ),
    responses(
        (status = 200, description = "Report found", body = ReportResponseDto),
        (status = 400, description = "Malformed report ID"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponseDto>> {
    let report = service.get(parse_id(&id, "report")?).await?;
    Ok(Json(report.into()))
}

/// Delete a report and every image it references
#[utoipa::path(
    delete,
    path = "/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID (UUID)")
    ),
    responses(
        (status = 200, description = "Report deleted", body = ReportDeletedResponseDto),
        (status = 400, description = "Malformed report ID"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn delete_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ReportDeletedResponseDto>> {
    let deletion = service.delete(parse_id(&id, "report")?).await?;

    Ok(Json(ReportDeletedResponseDto {
        message: "Report deleted successfully".to_string(),
        removed_images: deletion.count(|o| *o == CleanupOutcome::Removed),
        missing_images: deletion.count(|o| *o == CleanupOutcome::Missing),
        failed_images: deletion.count(|o| matches!(o, CleanupOutcome::Failed(_))),
    }))
}
