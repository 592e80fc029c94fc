use crate::domain::{PageState, RecordId};
use crate::forms::{ApplicationForm, FormMode};
use crate::templates::components::{application_form, deferred};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn update_page(id: &RecordId, state: &PageState<ApplicationForm>) -> Markup {
    desktop_layout(
        "Update Application",
        Nav::None,
        html! {
            div class="update-page-container" {
                (deferred(
                    "update-content",
                    &format!("/update/{id}/form"),
                    matches!(state, PageState::Loading),
                    update_content(id, state),
                ))
            }
        },
    )
}

pub fn update_content(id: &RecordId, state: &PageState<ApplicationForm>) -> Markup {
    html! {
        @match state {
            PageState::Loading => p class="center-text" { "Loading application data..." },
            PageState::Failed(msg) => p class="error-text" { (msg) },
            PageState::Loaded(form) => {
                h1 { "Update Application" }
                (application_form(form, &FormMode::Update(id.clone())))
            }
        }
    }
}
