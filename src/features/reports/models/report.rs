use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report category, matching the `report_type` database enum.
///
/// On the wire the variants keep their human labels (`"Damage Assessment"`),
/// which is what the mobile client submits and displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_type", rename_all = "snake_case")]
pub enum ReportType {
    #[serde(rename = "Damage Assessment")]
    DamageAssessment,
    #[serde(rename = "Resource Needs")]
    ResourceNeeds,
    #[serde(rename = "General Incident")]
    GeneralIncident,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::DamageAssessment,
        ReportType::ResourceNeeds,
        ReportType::GeneralIncident,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::DamageAssessment => "Damage Assessment",
            ReportType::ResourceNeeds => "Resource Needs",
            ReportType::GeneralIncident => "General Incident",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == trimmed)
            .ok_or_else(|| {
                format!(
                    "Invalid report type '{}'. Expected one of: {}",
                    trimmed,
                    Self::ALL.map(|t| t.label()).join(", ")
                )
            })
    }
}

/// Database model for report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub report_type: ReportType,
    pub location: String,
    pub description: String,
    /// `/uploads/<name>` references in upload order
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct NewReport {
    pub id: Uuid,
    pub report_type: ReportType,
    pub location: String,
    pub description: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<NewReport> for Report {
    fn from(r: NewReport) -> Self {
        Self {
            id: r.id,
            report_type: r.report_type,
            location: r.location,
            description: r.description,
            images: r.images,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_parses_labels() {
        assert_eq!(
            "Damage Assessment".parse::<ReportType>().unwrap(),
            ReportType::DamageAssessment
        );
        assert_eq!(
            " Resource Needs ".parse::<ReportType>().unwrap(),
            ReportType::ResourceNeeds
        );
        assert_eq!(
            "General Incident".parse::<ReportType>().unwrap(),
            ReportType::GeneralIncident
        );
    }

    #[test]
    fn test_report_type_rejects_unknown() {
        let err = "Flood".parse::<ReportType>().unwrap_err();
        assert!(err.contains("Damage Assessment, Resource Needs, General Incident"));
        assert!("damage assessment".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_report_type_serializes_as_label() {
        let json = serde_json::to_string(&ReportType::ResourceNeeds).unwrap();
        assert_eq!(json, "\"Resource Needs\"");
    }
}
