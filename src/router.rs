use crate::domain::{PageState, RecordId};
use crate::errors::ServerError;
use crate::flash::{self, FlashEnvelope};
use crate::forms::{self, ApplicationForm, DeleteOutcome, DeleteRequest, FormMode, LoadOutcome, SubmitOutcome};
use crate::responses::{
    html_response, html_response_clearing_flash, hx_redirect_with_flash, redirect_with_flash,
    xlsx_response, ResultResp,
};
use crate::spreadsheets::export_applications_xlsx;
use crate::store::{RecordStore, StoreError};
use crate::templates::pages;
use astra::Request;
use std::io::Read;
use std::sync::Arc;

/// Everything a handler needs; shared by all workers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::debug!(%method, %path, "request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(pages::home_page()),

        ("GET", ["create"]) => html_response(pages::create_page(&ApplicationForm::new())),
        ("POST", ["create"]) => submit(req, app, FormMode::Create),

        ("GET", ["gallery"]) => gallery(&req),
        ("GET", ["gallery", "content"]) => gallery_content(app),
        ("GET", ["gallery", "export.xlsx"]) => export(app),

        ("GET", ["details", id]) => details(&req, &RecordId::new(*id)),
        ("GET", ["details", id, "content"]) => details_content(app, &RecordId::new(*id)),

        ("GET", ["update", id]) => html_response(pages::update_page(
            &RecordId::new(*id),
            &PageState::Loading,
        )),
        ("GET", ["update", id, "form"]) => update_form(app, &RecordId::new(*id)),
        ("POST", ["update", id]) => submit(req, app, FormMode::Update(RecordId::new(*id))),
        ("POST", ["update", id, "delete"]) => delete(req, app, &RecordId::new(*id)),

        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;
    Ok(body)
}

fn submit(req: Request, app: &AppState, mode: FormMode) -> ResultResp {
    let form = ApplicationForm::parse(&read_body(req)?)?;

    match forms::submit(app.store.as_ref(), &mode, form) {
        SubmitOutcome::Saved { location, flash } => {
            redirect_with_flash(&location, &FlashEnvelope::new(flash, flash::now_millis()))
        }
        SubmitOutcome::Rejected(form) => match &mode {
            FormMode::Create => html_response(pages::create_page(&form)),
            FormMode::Update(id) => {
                html_response(pages::update_page(id, &PageState::Loaded(form)))
            }
        },
    }
}

fn gallery(req: &Request) -> ResultResp {
    let taken = flash::take(req, flash::now_millis());
    html_response_clearing_flash(
        pages::gallery_page(taken.shown.as_ref(), &PageState::Loading),
        taken.consumed,
    )
}

fn gallery_content(app: &AppState) -> ResultResp {
    let state = match app.store.list_all() {
        Ok(rows) => PageState::Loaded(rows),
        Err(_) => PageState::Failed("Could not fetch job applications".into()),
    };
    html_response(pages::gallery_content(&state))
}

fn export(app: &AppState) -> ResultResp {
    let rows = app.store.list_all()?;
    let buffer = export_applications_xlsx(&rows)?;
    xlsx_response(buffer, "job_applications.xlsx")
}

fn details(req: &Request, id: &RecordId) -> ResultResp {
    let taken = flash::take(req, flash::now_millis());
    html_response_clearing_flash(
        pages::details_page(id, taken.shown.as_ref(), &PageState::Loading),
        taken.consumed,
    )
}

fn details_content(app: &AppState, id: &RecordId) -> ResultResp {
    let state = match app.store.get_by_id(id) {
        Ok(record) => PageState::Loaded(Some(record)),
        Err(StoreError::NotFound) => PageState::Loaded(None),
        Err(_) => PageState::Failed("Could not fetch the job application".into()),
    };
    html_response(pages::details_content(&state))
}

fn update_form(app: &AppState, id: &RecordId) -> ResultResp {
    match forms::load(app.store.as_ref(), id) {
        LoadOutcome::Ready(form) => {
            html_response(pages::update_content(id, &PageState::Loaded(form)))
        }
        LoadOutcome::Missing(flash) => {
            hx_redirect_with_flash("/gallery", &FlashEnvelope::new(flash, flash::now_millis()))
        }
        LoadOutcome::Failed(msg) => html_response(pages::update_content(id, &PageState::Failed(msg))),
    }
}

fn delete(req: Request, app: &AppState, id: &RecordId) -> ResultResp {
    let body = read_body(req)?;
    let request = DeleteRequest::parse(&body)?;

    match forms::delete(app.store.as_ref(), id, request.confirmed()) {
        DeleteOutcome::NeedsConfirmation => html_response(pages::confirm_delete_page(id)),
        DeleteOutcome::Deleted { location, flash } => {
            redirect_with_flash(&location, &FlashEnvelope::new(flash, flash::now_millis()))
        }
        DeleteOutcome::Failed(msg) => {
            // Deleting from the update form posts its current values; from
            // the confirmation page it does not, so fall back to the row.
            let submitted = ApplicationForm::parse(&body)?;
            let form = if submitted.company_name.is_empty() && submitted.position.is_empty() {
                match forms::load(app.store.as_ref(), id) {
                    LoadOutcome::Ready(stored) => stored,
                    _ => submitted,
                }
            } else {
                submitted
            };
            html_response(pages::update_page(id, &PageState::Loaded(form.with_error(msg))))
        }
    }
}
