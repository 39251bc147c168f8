use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::volunteers::dtos::{
    LoginVolunteerDto, LoginVolunteerResponseDto, RegisterVolunteerDto,
};
use crate::features::volunteers::services::VolunteerService;
use crate::shared::types::MessageResponse;

/// Register a volunteer team
#[utoipa::path(
    post,
    path = "/api/volunteer/register",
    request_body = RegisterVolunteerDto,
    responses(
        (status = 201, description = "Volunteer registered successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Team name or phone number already registered")
    ),
    tag = "volunteers"
)]
pub async fn register_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppJson(dto): AppJson<RegisterVolunteerDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    dto.validate()?;

    service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Volunteer registered successfully")),
    ))
}

/// Log a volunteer team in
#[utoipa::path(
    post,
    path = "/api/volunteer/login",
    request_body = LoginVolunteerDto,
    responses(
        (status = 200, description = "Login successful", body = LoginVolunteerResponseDto),
        (status = 400, description = "Invalid team name or password")
    ),
    tag = "volunteers"
)]
pub async fn login_volunteer(
    State(service): State<Arc<VolunteerService>>,
    AppJson(dto): AppJson<LoginVolunteerDto>,
) -> Result<Json<LoginVolunteerResponseDto>> {
    dto.validate()?;

    let volunteer = service.login(dto).await?;
    Ok(Json(LoginVolunteerResponseDto {
        message: "Login successful".to_string(),
        volunteer: volunteer.into(),
    }))
}
