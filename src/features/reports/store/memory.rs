//! In-memory [`ReportStore`] used by service and handler tests. Mirrors the
//! Postgres store's contract: ids are UUID v7, `list` is ordered by id,
//! `search` is a case-sensitive literal substring match.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::store::{ReportStore, StorageError};

#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn insert(&self, record: &NewReport) -> Result<Uuid, StorageError> {
        let id = Uuid::now_v7();
        self.reports.write().await.push(Report {
            id,
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            date: record.date,
            status: record.status,
        });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Report>, StorageError> {
        let mut reports = self.reports.read().await.clone();
        reports.sort_by_key(|r| r.id);
        Ok(reports)
    }

    async fn search(&self, term: &str) -> Result<Vec<Report>, StorageError> {
        let reports = self.list().await?;
        Ok(reports
            .into_iter()
            .filter(|r| r.title.contains(term) || r.location.contains(term))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportStatus;
    use chrono::Utc;

    fn record(title: &str, location: &str) -> NewReport {
        NewReport {
            title: title.to_string(),
            description: String::new(),
            location: location.to_string(),
            date: Utc::now(),
            status: ReportStatus::Reported,
        }
    }

    fn record_with_description(title: &str, description: &str, location: &str) -> NewReport {
        NewReport {
            description: description.to_string(),
            ..record(title, location)
        }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_for_identical_payloads() {
        let store = MemoryReportStore::new();
        let r = record("Theft", "Park");
        let a = store.insert(&r).await.unwrap();
        let b = store.insert(&r).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn list_returns_records_in_insertion_order() {
        let store = MemoryReportStore::new();
        let first = store.insert(&record("First", "")).await.unwrap();
        let second = store.insert(&record("Second", "")).await.unwrap();

        let reports = store.list().await.unwrap();
        assert_eq!(
            reports.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![first, second]
        );
    }

    #[tokio::test]
    async fn list_is_idempotent() {
        let store = MemoryReportStore::new();
        store.insert(&record("Theft", "Park")).await.unwrap();

        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn search_matches_title_or_location() {
        let store = MemoryReportStore::new();
        store.insert(&record("Theft", "Central Park")).await.unwrap();
        store.insert(&record("Vandalism", "123 Main St")).await.unwrap();

        let by_location = store.search("Park").await.unwrap();
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].location, "Central Park");

        let by_title = store.search("Vand").await.unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Vandalism");
    }

    #[tokio::test]
    async fn search_does_not_match_description() {
        let store = MemoryReportStore::new();
        store
            .insert(&record_with_description(
                "Theft",
                "Bicycle taken near the Park entrance",
                "123 Main St",
            ))
            .await
            .unwrap();

        // Only title and location are searched; a term found solely in the
        // description matches nothing.
        assert!(store.search("Park").await.unwrap().is_empty());
        assert_eq!(store.search("Theft").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn search_is_case_sensitive() {
        let store = MemoryReportStore::new();
        store.insert(&record("Theft", "Central Park")).await.unwrap();

        assert_eq!(store.search("park").await.unwrap().len(), 0);
        assert_eq!(store.search("Park").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn search_results_are_a_subset_of_list() {
        let store = MemoryReportStore::new();
        store.insert(&record("Theft", "Central Park")).await.unwrap();
        store.insert(&record("Arson", "Hyde Park")).await.unwrap();
        store.insert(&record("Fraud", "Main St")).await.unwrap();

        let all = store.list().await.unwrap();
        let matched = store.search("Park").await.unwrap();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|m| all.contains(m)));
    }
}
