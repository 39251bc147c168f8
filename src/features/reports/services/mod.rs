mod report_service;
mod upload_intake;

pub use report_service::{ReportDeletion, ReportService};
pub use upload_intake::CleanupOutcome;
