use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report status enum matching database enum.
///
/// Every report is created as `Reported`; `UnderReview` and `Resolved`
/// document the intended lifecycle for a future verification workflow,
/// nothing in this service transitions a report out of `Reported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
pub enum ReportStatus {
    Reported,
    UnderReview,
    Resolved,
}

/// Database model for a stored crime report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    /// When the incident occurred; defaults to submission time when omitted.
    pub date: DateTime<Utc>,
    pub status: ReportStatus,
}

/// Normalized data for creating a new report, produced by the validator.
/// The `id` is assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub status: ReportStatus,
}
