use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::models::User;
use crate::shared::validation::{not_blank, valid_phone};

/// Request DTO for user registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    #[schema(example = "asha_k")]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Gender is required"))]
    pub gender: String,

    #[validate(
        required(message = "Valid age is required"),
        range(min = 1, message = "Valid age is required")
    )]
    #[schema(example = 34)]
    pub age: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Address is required"))]
    pub address: String,

    #[serde(default)]
    #[validate(custom(function = "valid_phone", message = "Phone number is required"))]
    #[schema(example = "+91 98765 43210")]
    pub phone_number: String,
}

/// Request DTO for user login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginUserDto {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public part of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub username: String,
    pub gender: String,
    pub age: i32,
    pub address: String,
    pub phone_number: String,
}

impl From<User> for UserProfileDto {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            gender: u.gender,
            age: u.age,
            address: u.address,
            phone_number: u.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginUserResponseDto {
    pub message: String,
    pub user: UserProfileDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::first_error_message;
    use serde_json::json;

    fn register(body: serde_json::Value) -> RegisterUserDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_registration_uses_camel_case() {
        let dto = register(json!({
            "username": "asha_k",
            "password": "secret1",
            "gender": "Female",
            "age": 34,
            "address": "Kochi",
            "phoneNumber": "9876543210"
        }));
        assert!(dto.validate().is_ok());
        assert_eq!(dto.phone_number, "9876543210");
    }

    #[test]
    fn test_short_password_rejected() {
        let dto = register(json!({
            "username": "asha_k",
            "password": "12345",
            "gender": "Female",
            "age": 34,
            "address": "Kochi",
            "phoneNumber": "9876543210"
        }));
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            first_error_message(&errors),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_age_must_be_positive() {
        let dto = register(json!({
            "username": "asha_k",
            "password": "secret1",
            "gender": "Female",
            "age": 0,
            "address": "Kochi",
            "phoneNumber": "9876543210"
        }));
        assert_eq!(
            first_error_message(&dto.validate().unwrap_err()),
            "Valid age is required"
        );
    }

    #[test]
    fn test_profile_hides_password_hash() {
        let profile = UserProfileDto {
            username: "asha_k".to_string(),
            gender: "Female".to_string(),
            age: 34,
            address: "Kochi".to_string(),
            phone_number: "9876543210".to_string(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["phoneNumber"], "9876543210");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
