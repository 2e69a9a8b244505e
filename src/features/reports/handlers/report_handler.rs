use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateReportDto, ReportCreatedDto, ReportResponseDto, ReportSearchQuery,
};
use crate::features::reports::services::ReportService;

/// Submit a crime report
///
/// Public endpoint. The payload is validated (non-empty title, parsable
/// date) before anything is persisted.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report stored", body = ReportCreatedDto),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ReportCreatedDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReportCreatedDto {
            message: "Crime reported".to_string(),
            id,
        }),
    ))
}

/// List or search crime reports
///
/// Public endpoint. Without `term` every report is returned in insertion
/// order; with `term`, only reports whose title or location contains it.
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportSearchQuery),
    responses(
        (status = 200, description = "Matching reports", body = Vec<ReportResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<ReportSearchQuery>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = match query.term.as_deref() {
        Some(term) => service.search(term).await?,
        None => service.list().await?,
    };

    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(Into::into).collect();
    Ok(Json(dtos))
}
