//! Normalizes a raw create payload into a well-formed report record.
//!
//! This is the only gate between untyped caller input and the store: the
//! handler deserializes into [`CreateReportDto`], and [`validate`] either
//! produces a [`NewReport`] or fails naming the offending field. No I/O,
//! no side effects.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::{NewReport, ReportStatus};

/// A schema-constraint violation on caller input, naming the failing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid field '{field}': {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate and normalize a create payload.
///
/// - `title` must be non-empty after trimming; the trimmed text is stored.
/// - `date`, when present and non-blank, must parse as RFC 3339; a blank or
///   absent date defaults to the current time (capture time, not incident
///   time).
/// - `description` and `location` default to the empty string.
/// - `status` is always `Reported` at creation.
pub fn validate(dto: CreateReportDto) -> Result<NewReport, ValidationError> {
    let title = dto.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        return Err(ValidationError::new(
            "title",
            "must be present and non-empty",
        ));
    }

    let date = match dto.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| ValidationError::new("date", format!("not a valid timestamp: {}", e)))?,
        None => Utc::now(),
    };

    Ok(NewReport {
        title: title.to_string(),
        description: dto.description.unwrap_or_default(),
        location: dto.location.unwrap_or_default(),
        date,
        status: ReportStatus::Reported,
    })
}
