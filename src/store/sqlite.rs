use crate::db::applications;
use crate::db::Database;
use crate::domain::{ApplicationFields, ApplicationRecord, RecordId};
use crate::store::{traced, RecordStore, StoreError, TABLE};

/// `job_applications` kept in a local SQLite file.
#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Row ids are integers here; anything else cannot name a row.
fn row_id(id: &RecordId) -> Result<i64, StoreError> {
    id.as_str().parse().map_err(|_| StoreError::NotFound)
}

impl RecordStore for SqliteStore {
    fn create(&self, fields: &ApplicationFields) -> Result<ApplicationRecord, StoreError> {
        tracing::debug!(table = TABLE, "insert");
        traced(
            "insert",
            self.db
                .with_conn(|conn| applications::insert_application(conn, fields)),
        )
    }

    fn get_by_id(&self, id: &RecordId) -> Result<ApplicationRecord, StoreError> {
        tracing::debug!(table = TABLE, %id, "select one");
        let res = row_id(id).and_then(|id| {
            self.db
                .with_conn(|conn| applications::get_application(conn, id))?
                .ok_or(StoreError::NotFound)
        });
        traced("select one", res)
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        tracing::debug!(table = TABLE, "select all");
        traced(
            "select all",
            self.db.with_conn(|conn| applications::list_applications(conn)),
        )
    }

    fn update(
        &self,
        id: &RecordId,
        fields: &ApplicationFields,
    ) -> Result<ApplicationRecord, StoreError> {
        tracing::debug!(table = TABLE, %id, "update");
        let res = row_id(id).and_then(|id| {
            self.db
                .with_conn(|conn| applications::update_application(conn, id, fields))
        });
        traced("update", res)
    }

    fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        tracing::debug!(table = TABLE, %id, "delete");
        let res = row_id(id).and_then(|id| {
            self.db
                .with_conn(|conn| applications::delete_application(conn, id))
        });
        traced("delete", res)
    }
}
