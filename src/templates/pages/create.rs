use crate::forms::{ApplicationForm, FormMode};
use crate::templates::components::application_form;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn create_page(form: &ApplicationForm) -> Markup {
    desktop_layout(
        "Log Application",
        Nav::Create,
        html! {
            div class="create-page-container" {
                h1 { "Log a New Application" }
                (application_form(form, &FormMode::Create))
            }
        },
    )
}
