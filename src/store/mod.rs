//! Access to the `job_applications` table.
//!
//! Pages only ever see [`RecordStore`]; whether rows live in the hosted
//! PostgREST backend or in a local SQLite file is decided once at startup.

use crate::domain::{ApplicationFields, ApplicationRecord, RecordId};
use thiserror::Error;

pub mod sqlite;
pub mod supabase;

pub use sqlite::SqliteStore;
pub use supabase::SupabaseStore;

pub const TABLE: &str = "job_applications";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A by-id read, update or delete matched no row.
    #[error("no rows found")]
    NotFound,
    /// The backend answered with an error body.
    #[error("{message}")]
    Remote {
        message: String,
        code: Option<String>,
    },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("database error: {0}")]
    Database(String),
}

/// Logs a failed store call; the result passes through unchanged.
pub(crate) fn traced<T>(op: &'static str, res: Result<T, StoreError>) -> Result<T, StoreError> {
    match &res {
        Err(StoreError::NotFound) => tracing::debug!(table = TABLE, op, "no rows"),
        Err(e) => tracing::warn!(table = TABLE, op, error = %e, "store call failed"),
        Ok(_) => {}
    }
    res
}

/// Single round trip per call; no retries, no caching.
pub trait RecordStore: Send + Sync {
    fn create(&self, fields: &ApplicationFields) -> Result<ApplicationRecord, StoreError>;

    fn get_by_id(&self, id: &RecordId) -> Result<ApplicationRecord, StoreError>;

    /// Every row, newest `created_at` first.
    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError>;

    fn update(
        &self,
        id: &RecordId,
        fields: &ApplicationFields,
    ) -> Result<ApplicationRecord, StoreError>;

    fn delete(&self, id: &RecordId) -> Result<(), StoreError>;
}
