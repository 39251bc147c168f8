use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::complaints::models::{Complaint, ComplaintStatus};
use crate::shared::validation::not_blank;

/// Request DTO for filing a complaint
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title, description, and username are required"))]
    #[schema(example = "No drinking water at camp")]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title, description, and username are required"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title, description, and username are required"))]
    #[schema(example = "asha_k")]
    pub username: String,
}

/// Optional filter for listing complaints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListComplaintsQuery {
    /// Only complaints filed by this user
    pub username: Option<String>,
}

/// Body of `PUT /complaints/{id}`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateComplaintStatusDto {
    #[validate(required(message = "Status is required"))]
    pub status: Option<ComplaintStatus>,
}

/// Body of `PATCH /complaints/{id}/view`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MarkComplaintViewedDto {
    pub viewed: Option<bool>,
    pub status: Option<ComplaintStatus>,
}

/// Response DTO for complaint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponseDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub username: String,
    pub status: ComplaintStatus,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintResponseDto {
    fn from(c: Complaint) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            username: c.username,
            status: c.status,
            viewed: c.viewed,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
