use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::complaints::dtos::{
    ComplaintResponseDto, CreateComplaintDto, ListComplaintsQuery, MarkComplaintViewedDto,
    UpdateComplaintStatusDto,
};
use crate::features::complaints::services::ComplaintService;
use crate::shared::types::MessageResponse;
use crate::shared::validation::parse_id;

/// File a complaint
#[utoipa::path(
    post,
    path = "/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint created", body = ComplaintResponseDto),
        (status = 400, description = "Validation error")
    ),
    tag = "complaints"
)]
pub async fn create_complaint(
    State(service): State<Arc<ComplaintService>>,
    AppJson(dto): AppJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<ComplaintResponseDto>)> {
    dto.validate()?;

    let complaint = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(complaint.into())))
}

/// List complaints
#[utoipa::path(
    get,
    path = "/complaints",
    params(ListComplaintsQuery),
    responses(
        (status = 200, description = "List of complaints", body = Vec<ComplaintResponseDto>)
    ),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(service): State<Arc<ComplaintService>>,
    Query(query): Query<ListComplaintsQuery>,
) -> Result<Json<Vec<ComplaintResponseDto>>> {
    let username = query.username.as_deref().filter(|u| !u.is_empty());
    let complaints = service.list(username).await?;
    Ok(Json(complaints.into_iter().map(Into::into).collect()))
}

/// Get complaint by ID
#[utoipa::path(
    get,
    path = "/complaints/{id}",
    params(
        ("id" = String, Path, description = "Complaint ID (UUID)")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ComplaintResponseDto),
        (status = 400, description = "Malformed complaint ID"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn get_complaint(
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<String>,
) -> Result<Json<ComplaintResponseDto>> {
    let complaint = service.get(parse_id(&id, "complaint")?).await?;
    Ok(Json(complaint.into()))
}

/// Update complaint status
#[utoipa::path(
    put,
    path = "/complaints/{id}",
    params(
        ("id" = String, Path, description = "Complaint ID (UUID)")
    ),
    request_body = UpdateComplaintStatusDto,
    responses(
        (status = 200, description = "Complaint updated", body = ComplaintResponseDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn update_complaint_status(
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateComplaintStatusDto>,
) -> Result<Json<ComplaintResponseDto>> {
    let id = parse_id(&id, "complaint")?;
    dto.validate()?;

    let status = dto
        .status
        .ok_or_else(|| AppError::Validation("Status is required".to_string()))?;
    let complaint = service.update_status(id, status).await?;
    Ok(Json(complaint.into()))
}

/// Mark a complaint as viewed and optionally change its status
#[utoipa::path(
    patch,
    path = "/complaints/{id}/view",
    params(
        ("id" = String, Path, description = "Complaint ID (UUID)")
    ),
    request_body = MarkComplaintViewedDto,
    responses(
        (status = 200, description = "Complaint updated", body = ComplaintResponseDto),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn mark_complaint_viewed(
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<MarkComplaintViewedDto>,
) -> Result<Json<ComplaintResponseDto>> {
    let complaint = service
        .mark_viewed(parse_id(&id, "complaint")?, dto)
        .await?;
    Ok(Json(complaint.into()))
}

/// Delete a complaint
#[utoipa::path(
    delete,
    path = "/complaints/{id}",
    params(
        ("id" = String, Path, description = "Complaint ID (UUID)")
    ),
    responses(
        (status = 200, description = "Complaint deleted", body = MessageResponse),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn delete_complaint(
    State(service): State<Arc<ComplaintService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    service.delete(parse_id(&id, "complaint")?).await?;
    Ok(Json(MessageResponse::new("Complaint deleted")))
}
