pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use repositories::PgReportRepository;
pub use services::ReportService;
