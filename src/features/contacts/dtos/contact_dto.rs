use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::contacts::models::Contact;
use crate::shared::validation::{not_blank, valid_phone};

/// Every tag must carry text; the list itself must not be empty
fn valid_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.is_empty() || tags.iter().any(|t| t.trim().is_empty()) {
        return Err(ValidationError::new("tags"));
    }
    Ok(())
}

/// Request DTO for adding a contact
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "All fields are required"))]
    #[schema(example = "District Control Room")]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "All fields are required"))]
    #[schema(example = "Emergency")]
    pub role: String,

    #[serde(default)]
    #[validate(custom(function = "valid_phone", message = "Invalid phone number"))]
    #[schema(example = "1077")]
    pub phone: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "control-room@district.gov.in")]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "valid_tags", message = "All fields are required"))]
    #[schema(example = json!(["Emergency", "Medical"]))]
    pub tags: Vec<String>,
}

/// Response DTO for contact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponseDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            role: c.role,
            phone: c.phone,
            email: c.email,
            tags: c.tags,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactCreatedResponseDto {
    pub message: String,
    pub contact: ContactResponseDto,
}
