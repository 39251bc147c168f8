use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contacts::dtos::{
    ContactCreatedResponseDto, ContactResponseDto, CreateContactDto,
};
use crate::features::contacts::services::ContactService;
use crate::shared::types::MessageResponse;
use crate::shared::validation::parse_id;

/// Add an emergency contact
#[utoipa::path(
    post,
    path = "/contacts/add",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact added successfully", body = ContactCreatedResponseDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already used by another contact")
    ),
    tag = "contacts"
)]
pub async fn add_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ContactCreatedResponseDto>)> {
    dto.validate()?;

    let contact = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponseDto {
            message: "Contact added successfully".to_string(),
            contact: contact.into(),
        }),
    ))
}

/// List all contacts
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "List of contacts", body = Vec<ContactResponseDto>)
    ),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(service): State<Arc<ContactService>>,
) -> Result<Json<Vec<ContactResponseDto>>> {
    let contacts = service.list().await?;
    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}

/// Get contact by ID
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(
        ("id" = String, Path, description = "Contact ID (UUID)")
    ),
    responses(
        (status = 200, description = "Contact found", body = ContactResponseDto),
        (status = 400, description = "Malformed contact ID"),
        (status = 404, description = "Contact not found")
    ),
    tag = "contacts"
)]
pub async fn get_contact(
    State(service): State<Arc<ContactService>>,
    Path(id): Path<String>,
) -> Result<Json<ContactResponseDto>> {
    let contact = service.get(parse_id(&id, "contact")?).await?;
    Ok(Json(contact.into()))
}

/// Delete a contact
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(
        ("id" = String, Path, description = "Contact ID (UUID)")
    ),
    responses(
        (status = 200, description = "Contact deleted successfully", body = MessageResponse),
        (status = 404, description = "Contact not found")
    ),
    tag = "contacts"
)]
pub async fn delete_contact(
    State(service): State<Arc<ContactService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    service.delete(parse_id(&id, "contact")?).await?;
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
