use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};

use super::ReportRepository;

/// Vec-backed repository used by handler and service tests
#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: Mutex<Vec<Report>>,
    fail_inserts: bool,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every insert fail as if the database were unreachable
    pub fn failing_inserts() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn insert(&self, report: NewReport) -> Result<Report> {
        if self.fail_inserts {
            return Err(AppError::Internal("report insert failed".to_string()));
        }

        let report = Report::from(report);
        self.reports.lock().unwrap().push(report.clone());
        Ok(report)
    }

    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        let mut reports = self.reports.lock().unwrap().clone();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(reports)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut reports = self.reports.lock().unwrap();
        let before = reports.len();
        reports.retain(|r| r.id != id);
        Ok(reports.len() < before)
    }
}
