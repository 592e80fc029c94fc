// src/forms.rs
//
// One form controller for both the create and the update page. The mode
// decides which store call a valid submission makes and where it lands.

use crate::domain::format::date_input_value;
use crate::domain::{ApplicationFields, ApplicationRecord, JobType, RecordId, Status};
use crate::errors::ServerError;
use crate::flash::Flash;
use crate::store::{RecordStore, StoreError};
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in Company Name, Position, and Status.")]
    MissingRequired,
    #[error("Status must be one of Applied, Interviewing, Offer, or Rejected.")]
    UnknownStatus,
    #[error("'{0}' is not a known job type.")]
    UnknownJobType(String),
    #[error("Application date must be a calendar date (YYYY-MM-DD).")]
    BadDate,
    #[error("Job posting URL must be a full link, e.g. https://...")]
    BadUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(RecordId),
}

impl FormMode {
    pub fn action(&self) -> String {
        match self {
            FormMode::Create => "/create".to_string(),
            FormMode::Update(id) => format!("/update/{id}"),
        }
    }

    fn landing(&self) -> (String, Flash) {
        match self {
            FormMode::Create => (
                "/gallery".to_string(),
                Flash::Message("Application logged successfully!".into()),
            ),
            FormMode::Update(id) => (
                format!("/details/{id}"),
                Flash::Message("Application updated successfully!".into()),
            ),
        }
    }

    fn store_error_text(&self, err: &StoreError) -> String {
        match self {
            FormMode::Create => format!("Error submitting application: {err}"),
            FormMode::Update(_) => format!("Error updating application: {err}"),
        }
    }
}

/// Editable values exactly as typed, plus the single inline error slot.
///
/// Fields missing from a submitted body read as empty, never as the blank
/// form's defaults, so an omitted status fails validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub application_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub notes: String,
    #[serde(skip)]
    pub error: Option<String>,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            position: String::new(),
            application_date: String::new(),
            status: Status::default().as_str().to_string(),
            job_type: String::new(),
            url: String::new(),
            notes: String::new(),
            error: None,
        }
    }
}

fn optional(raw: &str) -> Option<String> {
    let t = raw.trim();
    (!t.is_empty()).then(|| t.to_string())
}

impl ApplicationForm {
    /// Blank form; status starts at Applied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: &ApplicationRecord) -> Self {
        Self {
            company_name: record.company_name.clone(),
            position: record.position.clone(),
            application_date: date_input_value(record.application_date.as_deref()),
            status: record.status.clone(),
            job_type: record.job_type.clone().unwrap_or_default(),
            url: record.url.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
            error: None,
        }
    }

    pub fn parse(body: &str) -> Result<Self, ServerError> {
        serde_urlencoded::from_str(body)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form: {e}")))
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn validate(&self) -> Result<ApplicationFields, ValidationError> {
        let company_name = self.company_name.trim();
        let position = self.position.trim();
        let status = self.status.trim();

        if company_name.is_empty() || position.is_empty() || status.is_empty() {
            return Err(ValidationError::MissingRequired);
        }

        let status = Status::from_label(status).ok_or(ValidationError::UnknownStatus)?;

        let job_type = match optional(&self.job_type) {
            None => None,
            Some(t) => Some(JobType::from_label(&t).ok_or(ValidationError::UnknownJobType(t))?),
        };

        let application_date = match optional(&self.application_date) {
            None => None,
            Some(d) => Some(
                NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| ValidationError::BadDate)?,
            ),
        };

        let url = optional(&self.url);
        if let Some(u) = &url {
            Url::parse(u).map_err(|_| ValidationError::BadUrl)?;
        }

        Ok(ApplicationFields {
            company_name: company_name.to_string(),
            position: position.to_string(),
            application_date,
            status,
            job_type,
            url,
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved { location: String, flash: Flash },
    /// Stay on the page; the form carries the inline error.
    Rejected(ApplicationForm),
}

pub fn submit(store: &dyn RecordStore, mode: &FormMode, form: ApplicationForm) -> SubmitOutcome {
    let fields = match form.validate() {
        Ok(f) => f,
        Err(e) => return SubmitOutcome::Rejected(form.with_error(e.to_string())),
    };

    let saved = match mode {
        FormMode::Create => store.create(&fields),
        FormMode::Update(id) => store.update(id, &fields),
    };

    match saved {
        Ok(record) => {
            tracing::info!(id = %record.id, action = %mode.action(), "application saved");
            let (location, flash) = mode.landing();
            SubmitOutcome::Saved { location, flash }
        }
        Err(e) => SubmitOutcome::Rejected(form.with_error(mode.store_error_text(&e))),
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    Ready(ApplicationForm),
    /// The record is gone; leave for the gallery with this error.
    Missing(Flash),
    Failed(String),
}

/// Initial fetch of the update page.
pub fn load(store: &dyn RecordStore, id: &RecordId) -> LoadOutcome {
    match store.get_by_id(id) {
        Ok(record) => LoadOutcome::Ready(ApplicationForm::from_record(&record)),
        Err(StoreError::NotFound) => {
            LoadOutcome::Missing(Flash::Error("Application not found.".into()))
        }
        Err(_) => LoadOutcome::Failed("Could not fetch the application data.".into()),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteRequest {
    pub confirm: String,
}

impl DeleteRequest {
    pub fn parse(body: &str) -> Result<Self, ServerError> {
        serde_urlencoded::from_str(body)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form: {e}")))
    }

    pub fn confirmed(&self) -> bool {
        self.confirm == "yes"
    }
}

#[derive(Debug)]
pub enum DeleteOutcome {
    /// Nothing was sent to the store; ask first.
    NeedsConfirmation,
    Deleted { location: String, flash: Flash },
    Failed(String),
}

pub fn delete(store: &dyn RecordStore, id: &RecordId, confirmed: bool) -> DeleteOutcome {
    if !confirmed {
        return DeleteOutcome::NeedsConfirmation;
    }

    match store.delete(id) {
        Ok(()) => {
            tracing::info!(%id, "application deleted");
            DeleteOutcome::Deleted {
                location: "/gallery".to_string(),
                flash: Flash::Message("Application deleted.".into()),
            }
        }
        Err(e) => DeleteOutcome::Failed(format!("Error deleting application: {e}")),
    }
}
