use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::volunteers::models::Volunteer;
use crate::shared::validation::not_blank;

/// Request DTO for volunteer team registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVolunteerDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please fill all fields"))]
    #[schema(example = "Rescue Squad 4")]
    pub team_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please fill all fields"))]
    pub phone_number: String,
}

/// Request DTO for volunteer login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginVolunteerDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please fill all fields"))]
    pub team_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please fill all fields"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerResponseDto {
    pub id: Uuid,
    pub team_name: String,
    pub phone_number: String,
}

impl From<Volunteer> for VolunteerResponseDto {
    fn from(v: Volunteer) -> Self {
        Self {
            id: v.id,
            team_name: v.team_name,
            phone_number: v.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginVolunteerResponseDto {
    pub message: String,
    pub volunteer: VolunteerResponseDto,
}
