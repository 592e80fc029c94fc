use crate::domain::format::format_long_date;
use crate::domain::{ApplicationRecord, PageState, RecordId};
use crate::flash::ShownFlash;
use crate::templates::components::{deferred, flash_alert, status_badge};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

/// `Loaded(None)` is the not-found state.
pub type DetailsState = PageState<Option<ApplicationRecord>>;

pub fn details_page(id: &RecordId, flash: Option<&ShownFlash>, state: &DetailsState) -> Markup {
    desktop_layout(
        "Application Details",
        Nav::None,
        html! {
            div class="details-page-container" {
                @if let Some(shown) = flash {
                    (flash_alert(shown))
                }

                (deferred(
                    "details-content",
                    &format!("/details/{id}/content"),
                    matches!(state, PageState::Loading),
                    details_content(state),
                ))
            }
        },
    )
}

pub fn details_content(state: &DetailsState) -> Markup {
    html! {
        @match state {
            PageState::Loading => p class="center-text" { "Loading application details..." },
            PageState::Failed(msg) => p class="error-text" { (msg) },
            PageState::Loaded(None) => p class="center-text" { "Application not found." },
            PageState::Loaded(Some(app)) => (loaded(app)),
        }
    }
}

fn loaded(app: &ApplicationRecord) -> Markup {
    html! {
        div class="details-content" {
            h1 { (app.company_name) " - " (app.position) }

            @if let Some(job_type) = app.job_type.as_deref().filter(|t| !t.is_empty()) {
                div class="detail-item" {
                    span class="label" { "Type:" }
                    span { (job_type) }
                }
            }

            div class="detail-item" {
                span class="label" { "Status:" }
                (status_badge(&app.status))
            }

            div class="detail-item" {
                span class="label" { "Applied On:" }
                span class="applied-on" { (format_long_date(app.application_date.as_deref())) }
            }

            @if let Some(url) = app.url.as_deref().filter(|u| !u.is_empty()) {
                div class="detail-item" {
                    span class="label" { "Posting URL:" }
                    a href=(url) target="_blank" rel="noopener noreferrer" { (url) }
                }
            }

            @if let Some(notes) = app.notes.as_deref().filter(|n| !n.is_empty()) {
                div class="detail-item notes-section" {
                    span class="label" { "Notes:" }
                    div class="notes-content" { (notes) }
                }
            }

            div class="details-actions" {
                a href=(format!("/update/{}", app.id)) class="edit-details-button" { "Edit Application" }
            }
        }
    }
}
