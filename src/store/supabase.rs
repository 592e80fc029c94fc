// src/store/supabase.rs
//
// Hosted backend: the PostgREST API in front of the `job_applications` table.

use crate::domain::{ApplicationFields, ApplicationRecord, RecordId};
use crate::store::{traced, RecordStore, StoreError, TABLE};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Method;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// PostgREST code for "JSON object requested, multiple (or no) rows returned".
const NO_ROWS: &str = "PGRST116";
/// Postgres invalid_text_representation, e.g. `id=eq.abc` on an integer key.
const BAD_ID: &str = "22P02";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub struct SupabaseStore {
    client: Client,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: table_endpoint(base_url)?,
            api_key: api_key.into(),
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Sends the request and returns the body of a 2xx response.
    fn send(&self, req: RequestBuilder) -> Result<String, StoreError> {
        let resp = req
            .send()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(decode_error(status.as_u16(), &body))
        }
    }

    fn send_rows(&self, req: RequestBuilder) -> Result<Vec<ApplicationRecord>, StoreError> {
        let body = self.send(req)?;
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// `https://xyz.supabase.co` -> `https://xyz.supabase.co/rest/v1/job_applications`
pub(crate) fn table_endpoint(base_url: &str) -> Result<Url, StoreError> {
    let base = base_url.trim().trim_end_matches('/');
    Url::parse(&format!("{base}/rest/v1/{TABLE}"))
        .map_err(|e| StoreError::Transport(format!("invalid store url '{base_url}': {e}")))
}

pub(crate) fn row_url(endpoint: &Url, id: &RecordId) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("id", &format!("eq.{id}"))
        .append_pair("select", "*");
    url
}

pub(crate) fn list_url(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("select", "*")
        .append_pair("order", "created_at.desc");
    url
}

/// Maps a non-2xx PostgREST body to a store error. "No rows" and an id the
/// key column cannot hold both become `NotFound`.
pub(crate) fn decode_error(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(e) if matches!(e.code.as_deref(), Some(NO_ROWS) | Some(BAD_ID)) => StoreError::NotFound,
        Ok(e) => StoreError::Remote {
            message: e
                .message
                .or(e.details)
                .unwrap_or_else(|| format!("HTTP {status}")),
            code: e.code,
        },
        Err(_) => StoreError::Remote {
            message: format!("HTTP {status}: {}", body.trim()),
            code: None,
        },
    }
}

fn first_row(rows: Vec<ApplicationRecord>) -> Result<ApplicationRecord, StoreError> {
    rows.into_iter().next().ok_or(StoreError::NotFound)
}

impl RecordStore for SupabaseStore {
    fn create(&self, fields: &ApplicationFields) -> Result<ApplicationRecord, StoreError> {
        tracing::debug!(table = TABLE, "insert");
        let req = self
            .request(Method::POST, self.endpoint.clone())
            .header("Prefer", "return=representation")
            .json(fields);
        traced("insert", self.send_rows(req).and_then(first_row))
    }

    fn get_by_id(&self, id: &RecordId) -> Result<ApplicationRecord, StoreError> {
        tracing::debug!(table = TABLE, %id, "select one");
        let req = self
            .request(Method::GET, row_url(&self.endpoint, id))
            .header("Accept", SINGLE_OBJECT);
        let res = self.send(req).and_then(|body| {
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
        });
        traced("select one", res)
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, StoreError> {
        tracing::debug!(table = TABLE, "select all");
        let req = self.request(Method::GET, list_url(&self.endpoint));
        traced("select all", self.send_rows(req))
    }

    fn update(
        &self,
        id: &RecordId,
        fields: &ApplicationFields,
    ) -> Result<ApplicationRecord, StoreError> {
        tracing::debug!(table = TABLE, %id, "update");
        let req = self
            .request(Method::PATCH, row_url(&self.endpoint, id))
            .header("Prefer", "return=representation")
            .json(fields);
        traced("update", self.send_rows(req).and_then(first_row))
    }

    fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        tracing::debug!(table = TABLE, %id, "delete");
        let req = self
            .request(Method::DELETE, row_url(&self.endpoint, id))
            .header("Prefer", "return=representation");
        let res = self.send_rows(req).and_then(first_row).map(|_| ());
        traced("delete", res)
    }
}
