use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::Report;
use crate::features::reports::store::ReportStore;
use crate::features::reports::validator;

/// Service for crime report operations.
///
/// Owns the validate-then-persist pipeline for submissions and the
/// list/search retrieval contract. Holds the store behind a trait object;
/// in production that is [`PgReportStore`](crate::features::reports::store::PgReportStore)
/// over the shared pool opened at startup.
pub struct ReportService {
    store: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Validate a raw submission and persist it, returning the assigned id.
    ///
    /// Invalid input fails before the store is touched. The caller decides
    /// whether to retry on storage failure; no retry happens here.
    pub async fn create(&self, dto: CreateReportDto) -> Result<Uuid> {
        let record = validator::validate(dto)?;

        let id = self.store.insert(&record).await.map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Storage {
                message: "Failed to report crime",
                source: e,
            }
        })?;

        tracing::info!("Created report: {} ({})", id, record.title);
        Ok(id)
    }

    /// Every stored report, ordered by id (insertion order).
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.store.list().await.map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Storage {
                message: "Failed to fetch crimes",
                source: e,
            }
        })
    }

    /// Reports whose title or location contains `term` as a case-sensitive
    /// substring. An empty term is equivalent to [`list`](Self::list).
    pub async fn search(&self, term: &str) -> Result<Vec<Report>> {
        if term.is_empty() {
            return self.list().await;
        }

        self.store.search(term).await.map_err(|e| {
            tracing::error!("Failed to search reports: {:?}", e);
            AppError::Storage {
                message: "Failed to fetch crimes",
                source: e,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{NewReport, ReportStatus};
    use crate::features::reports::store::memory::MemoryReportStore;
    use crate::features::reports::store::StorageError;
    use async_trait::async_trait;
    use chrono::Utc;

    /// Store stub simulating an unreachable database.
    struct UnreachableStore;

    #[async_trait]
    impl ReportStore for UnreachableStore {
        async fn insert(&self, _record: &NewReport) -> std::result::Result<Uuid, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn list(&self) -> std::result::Result<Vec<Report>, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn search(&self, _term: &str) -> std::result::Result<Vec<Report>, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn service() -> (ReportService, Arc<MemoryReportStore>) {
        let store = Arc::new(MemoryReportStore::new());
        (ReportService::new(store.clone()), store)
    }

    fn dto(title: Option<&str>, description: Option<&str>, location: Option<&str>) -> CreateReportDto {
        CreateReportDto {
            title: title.map(String::from),
            description: description.map(String::from),
            location: location.map(String::from),
            date: None,
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let (service, _) = service();
        let before = Utc::now();

        let id = service
            .create(dto(Some("Theft"), Some("Bicycle stolen"), Some("123 Main St")))
            .await
            .unwrap();

        let reports = service.list().await.unwrap();
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.id, id);
        assert_eq!(report.title, "Theft");
        assert_eq!(report.description, "Bicycle stolen");
        assert_eq!(report.location, "123 Main St");
        assert_eq!(report.status, ReportStatus::Reported);
        assert!(report.date >= before && report.date <= Utc::now());
    }

    #[tokio::test]
    async fn repeated_identical_creates_get_distinct_ids() {
        let (service, _) = service();
        let a = service.create(dto(Some("Theft"), None, None)).await.unwrap();
        let b = service.create(dto(Some("Theft"), None, None)).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_title_never_reaches_the_store() {
        let (service, store) = service();

        let err = service
            .create(dto(Some(""), None, Some("Park")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("title")));

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_term_is_equivalent_to_list() {
        let (service, _) = service();
        service.create(dto(Some("Theft"), None, Some("Park"))).await.unwrap();
        service.create(dto(Some("Fraud"), None, Some("Mall"))).await.unwrap();

        assert_eq!(
            service.search("").await.unwrap(),
            service.list().await.unwrap()
        );
    }

    #[tokio::test]
    async fn search_filters_by_title_or_location() {
        let (service, _) = service();
        service
            .create(dto(Some("Theft"), None, Some("Central Park")))
            .await
            .unwrap();
        service
            .create(dto(Some("Burglary"), None, Some("123 Main St")))
            .await
            .unwrap();

        let matched = service.search("Park").await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "Central Park");
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_storage_errors() {
        let service = ReportService::new(Arc::new(UnreachableStore));

        let err = service.create(dto(Some("Theft"), None, None)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage {
                message: "Failed to report crime",
                ..
            }
        ));

        let err = service.list().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage {
                message: "Failed to fetch crimes",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn failed_create_leaves_committed_records_visible() {
        let (good_service, _store) = service();
        good_service
            .create(dto(Some("Theft"), None, Some("Park")))
            .await
            .unwrap();

        // Second service over an unreachable store: the create fails and the
        // previously committed record is still the only one visible.
        let bad_service = ReportService::new(Arc::new(UnreachableStore));
        assert!(bad_service.create(dto(Some("Arson"), None, None)).await.is_err());

        let reports = good_service.list().await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].title, "Theft");
    }
}
