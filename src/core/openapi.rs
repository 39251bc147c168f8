use utoipa::{Modify, OpenApi};

use crate::features::camps::{dtos as camps_dtos, handlers as camps_handlers};
use crate::features::complaints::{
    dtos as complaints_dtos, handlers as complaints_handlers, models as complaints_models,
};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::uploads::handlers as uploads_handlers;
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::features::volunteers::{dtos as volunteers_dtos, handlers as volunteers_handlers};
use crate::shared::types::{Meta, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::submit_report,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::delete_report,
        // Uploads
        uploads_handlers::serve_upload,
        // Camps
        camps_handlers::add_camp,
        camps_handlers::list_camps,
        camps_handlers::delete_camp,
        // Complaints
        complaints_handlers::create_complaint,
        complaints_handlers::list_complaints,
        complaints_handlers::get_complaint,
        complaints_handlers::update_complaint_status,
        complaints_handlers::mark_complaint_viewed,
        complaints_handlers::delete_complaint,
        // Contacts
        contacts_handlers::add_contact,
        contacts_handlers::list_contacts,
        contacts_handlers::get_contact,
        contacts_handlers::delete_contact,
        // Users
        users_handlers::register_user,
        users_handlers::login_user,
        // Volunteers
        volunteers_handlers::register_volunteer,
        volunteers_handlers::login_volunteer,
    ),
    components(
        schemas(
            // Shared
            Meta,
            MessageResponse,
            // Reports
            reports_models::ReportType,
            reports_dtos::SubmitReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportCreatedResponseDto,
            reports_dtos::ReportDeletedResponseDto,
            // Camps
            camps_dtos::CreateCampDto,
            camps_dtos::CampResponseDto,
            camps_dtos::CampMessageResponseDto,
            // Complaints
            complaints_models::ComplaintStatus,
            complaints_dtos::CreateComplaintDto,
            complaints_dtos::UpdateComplaintStatusDto,
            complaints_dtos::MarkComplaintViewedDto,
            complaints_dtos::ComplaintResponseDto,
            // Contacts
            contacts_dtos::CreateContactDto,
            contacts_dtos::ContactResponseDto,
            contacts_dtos::ContactCreatedResponseDto,
            // Users
            users_dtos::RegisterUserDto,
            users_dtos::LoginUserDto,
            users_dtos::UserProfileDto,
            users_dtos::LoginUserResponseDto,
            // Volunteers
            volunteers_dtos::RegisterVolunteerDto,
            volunteers_dtos::LoginVolunteerDto,
            volunteers_dtos::VolunteerResponseDto,
            volunteers_dtos::LoginVolunteerResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Incident reports with image uploads"),
        (name = "uploads", description = "Stored report images"),
        (name = "camps", description = "Relief camps"),
        (name = "complaints", description = "Citizen complaints"),
        (name = "contacts", description = "Emergency contacts directory"),
        (name = "auth", description = "Citizen user registration and login"),
        (name = "volunteers", description = "Volunteer team registration and login"),
    ),
    info(
        title = "Disaster Relief API",
        version = "0.1.0",
        description = "API documentation for the disaster relief coordination backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/reports/submit",
            "/reports",
            "/reports/{id}",
            "/uploads/{filename}",
            "/camps/add",
            "/complaints/{id}/view",
            "/contacts/{id}",
            "/api/auth/login",
            "/api/volunteer/register",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Relief".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Relief");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
