use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::camps::models::Camp;
use crate::shared::validation::not_blank;

/// Request DTO for adding a camp
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCampDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "All fields are required"))]
    #[schema(example = "Government School Camp")]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "All fields are required"))]
    #[schema(example = "Aluva, Ernakulam")]
    pub location: String,

    #[validate(
        required(message = "All fields are required"),
        range(min = 1, message = "Capacity must be at least 1")
    )]
    #[schema(example = 250)]
    pub capacity: Option<i32>,
}

/// Response DTO for camp
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampResponseDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Camp> for CampResponseDto {
    fn from(c: Camp) -> Self {
        Self {
            id: c.id,
            name: c.name,
            location: c.location,
            capacity: c.capacity,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// `{message, camp}` body used by both add and delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampMessageResponseDto {
    pub message: String,
    pub camp: CampResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::first_error_message;

    fn parse(value: serde_json::Value) -> CreateCampDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_camp() {
        let dto = parse(serde_json::json!({
            "name": "Town hall",
            "location": "Ward 3",
            "capacity": 120
        }));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_required() {
        let dto = parse(serde_json::json!({ "name": "Town hall" }));
        let errors = dto.validate().unwrap_err();
        assert_eq!(first_error_message(&errors), "All fields are required");
    }

    #[test]
    fn test_capacity_must_be_positive() {
        let dto = parse(serde_json::json!({
            "name": "Town hall",
            "location": "Ward 3",
            "capacity": 0
        }));
        let errors = dto.validate().unwrap_err();
        assert_eq!(first_error_message(&errors), "Capacity must be at least 1");
    }
}
