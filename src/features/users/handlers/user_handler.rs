use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{LoginUserDto, LoginUserResponseDto, RegisterUserDto};
use crate::features::users::services::UserService;
use crate::shared::types::MessageResponse;

/// Register a citizen user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or phone number already registered")
    ),
    tag = "auth"
)]
pub async fn register_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    dto.validate()?;

    service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Log a citizen user in
///
/// Returns the user's profile. No session or token is issued.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Login successful", body = LoginUserResponseDto),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<LoginUserDto>,
) -> Result<Json<LoginUserResponseDto>> {
    dto.validate()?;

    let user = service.login(dto).await?;
    Ok(Json(LoginUserResponseDto {
        message: "Login successful".to_string(),
        user: user.into(),
    }))
}
