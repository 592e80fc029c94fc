use crate::db::{init_db, Database};
use crate::domain::{ApplicationFields, ApplicationRecord, RecordId, Status};
use crate::router::AppState;
use crate::store::{RecordStore, SqliteStore, StoreError};
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Fresh SQLite file per test, initialized from the production schema.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "jobtrack_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_SEQ.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn sqlite_app() -> (Database, AppState) {
    let db = init_test_db();
    let store: Arc<dyn RecordStore> = Arc::new(SqliteStore::new(db.clone()));
    (db, AppState::new(store))
}

pub fn fields(company: &str, status: Status) -> ApplicationFields {
    ApplicationFields {
        company_name: company.to_string(),
        position: "Software Engineer".to_string(),
        application_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 9),
        status,
        job_type: None,
        url: None,
        notes: None,
    }
}

pub fn seed(app: &AppState, company: &str, status: Status) -> ApplicationRecord {
    app.store
        .create(&fields(company, status))
        .expect("seed insert failed")
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// The `name=value` part of the Set-Cookie header, ready to send back.
pub fn cookie_pair(resp: &Response) -> String {
    let set_cookie = header(resp, "Set-Cookie").expect("response sets no cookie");
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Wraps a store and counts calls per operation.
pub struct CountingStore {
    inner: Arc<dyn RecordStore>,
    pub creates: AtomicUsize,
    pub reads: AtomicUsize,
    pub lists: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn RecordStore>) -> Self {
        Self {
            inner,
            creates: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
            lists: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }
}

impl RecordStore for CountingStore {
    fn create(&self, fields: &ApplicationFields) -> Result<ApplicationRecord, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(fields)
    }

    fn get_by_id(&self, id: &RecordId) -> Result<ApplicationRecord, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id)
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.inner.list_all()
    }

    fn update(
        &self,
        id: &RecordId,
        fields: &ApplicationFields,
    ) -> Result<ApplicationRecord, StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, fields)
    }

    fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id)
    }
}

/// Every call fails the way an unreachable backend would.
pub struct FailingStore;

fn boom<T>() -> Result<T, StoreError> {
    Err(StoreError::Remote {
        message: "connection refused".into(),
        code: None,
    })
}

impl RecordStore for FailingStore {
    fn create(&self, _: &ApplicationFields) -> Result<ApplicationRecord, StoreError> {
        boom()
    }

    fn get_by_id(&self, _: &RecordId) -> Result<ApplicationRecord, StoreError> {
        boom()
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        boom()
    }

    fn update(&self, _: &RecordId, _: &ApplicationFields) -> Result<ApplicationRecord, StoreError> {
        boom()
    }

    fn delete(&self, _: &RecordId) -> Result<(), StoreError> {
        boom()
    }
}

pub fn failing_app() -> AppState {
    AppState::new(Arc::new(FailingStore))
}

/// SQLite-backed app whose store calls can be counted.
pub fn counting_app() -> (Arc<CountingStore>, AppState) {
    let db = init_test_db();
    let counting = Arc::new(CountingStore::new(Arc::new(SqliteStore::new(db))));
    let store: Arc<dyn RecordStore> = counting.clone();
    (counting, AppState::new(store))
}
