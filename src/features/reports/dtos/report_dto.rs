use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Report, ReportStatus};

/// Request DTO for submitting a crime report.
///
/// All fields arrive loosely typed; the reports validator normalizes this
/// into a `NewReport` before anything touches the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    /// Short label for the incident type (e.g., "Theft")
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub title: Option<String>,

    /// Free-form incident narrative
    #[validate(length(max = 10000, message = "Description must not exceed 10000 characters"))]
    pub description: Option<String>,

    /// Where the incident occurred (opaque text, no geocoding)
    #[validate(length(max = 512, message = "Location must not exceed 512 characters"))]
    pub location: Option<String>,

    /// When the incident occurred, RFC 3339 text (defaults to submission time)
    pub date: Option<String>,
}

/// Response DTO for a successful report submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportCreatedDto {
    pub message: String,
    pub id: Uuid,
}

/// Response DTO for a stored report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub status: ReportStatus,
}

impl From<Report> for ReportResponseDto {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            title: report.title,
            description: report.description,
            location: report.location,
            date: report.date,
            status: report.status,
        }
    }
}

/// Query parameters for listing/searching reports
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReportSearchQuery {
    /// Substring to match against title or location; omit to list everything
    pub term: Option<String>,
}
