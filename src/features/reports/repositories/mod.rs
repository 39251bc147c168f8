mod report_repository;
#[cfg(test)]
mod memory;

pub use report_repository::{PgReportRepository, ReportRepository};
#[cfg(test)]
pub use memory::InMemoryReportRepository;
