//! Persistence seam for crime reports.
//!
//! The service talks to a [`ReportStore`] trait object so the production
//! Postgres store can be swapped for the in-memory store in tests. Both
//! implementations promise the same contract: `insert` assigns a fresh
//! time-ordered UUID and makes the record fully visible or not at all,
//! `list` returns every record ordered by id (insertion order, since ids
//! are UUID v7), and `search` does a case-sensitive literal substring
//! match against title or location.

mod pg;

#[cfg(test)]
pub mod memory;

pub use pg::PgReportStore;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::features::reports::models::{NewReport, Report};

/// Failure kind for unreachable or failed persistence operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a normalized record, assigning and returning a fresh id.
    async fn insert(&self, record: &NewReport) -> Result<Uuid, StorageError>;

    /// Every stored report, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Report>, StorageError>;

    /// Reports whose title or location contains `term` as a case-sensitive
    /// substring. Callers pass a non-empty term; the service maps an empty
    /// term to `list`.
    async fn search(&self, term: &str) -> Result<Vec<Report>, StorageError>;
}
