use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::camps::dtos::{CampMessageResponseDto, CampResponseDto, CreateCampDto};
use crate::features::camps::services::CampService;
use crate::shared::validation::parse_id;

/// Add a relief camp
#[utoipa::path(
    post,
    path = "/camps/add",
    request_body = CreateCampDto,
    responses(
        (status = 201, description = "Camp added successfully", body = CampMessageResponseDto),
        (status = 400, description = "Validation error")
    ),
    tag = "camps"
)]
pub async fn add_camp(
    State(service): State<Arc<CampService>>,
    AppJson(dto): AppJson<CreateCampDto>,
) -> Result<(StatusCode, Json<CampMessageResponseDto>)> {
    dto.validate()?;

    let camp = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CampMessageResponseDto {
            message: "Camp added successfully".to_string(),
            camp: camp.into(),
        }),
    ))
}

/// List all camps
#[utoipa::path(
    get,
    path = "/camps",
    responses(
        (status = 200, description = "List of camps", body = Vec<CampResponseDto>)
    ),
    tag = "camps"
)]
pub async fn list_camps(
    State(service): State<Arc<CampService>>,
) -> Result<Json<Vec<CampResponseDto>>> {
    let camps = service.list().await?;
    Ok(Json(camps.into_iter().map(Into::into).collect()))
}

/// Delete a camp
#[utoipa::path(
    delete,
    path = "/camps/{id}",
    params(
        ("id" = String, Path, description = "Camp ID (UUID)")
    ),
    responses(
        (status = 200, description = "Camp deleted successfully", body = CampMessageResponseDto),
        (status = 400, description = "Malformed camp ID"),
        (status = 404, description = "Camp not found")
    ),
    tag = "camps"
)]
pub async fn delete_camp(
    State(service): State<Arc<CampService>>,
    Path(id): Path<String>,
) -> Result<Json<CampMessageResponseDto>> {
    let camp = service.delete(parse_id(&id, "camp")?).await?;
    Ok(Json(CampMessageResponseDto {
        message: "Camp deleted successfully".to_string(),
        camp: camp.into(),
    }))
}
