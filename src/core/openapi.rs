use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers, models as reports_models};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports (public)
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
    ),
    components(
        schemas(
            ErrorBody,
            reports_models::ReportStatus,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportCreatedDto,
            reports_dtos::ReportResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Community crime reports (public)"),
    ),
    info(
        title = "CrimeWatch API",
        version = "0.1.0",
        description = "Community crime reporting API",
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
