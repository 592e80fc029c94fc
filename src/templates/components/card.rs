use crate::domain::ApplicationRecord;
use crate::templates::components::status_badge;
use maud::{html, Markup};

pub fn application_card(app: &ApplicationRecord) -> Markup {
    let class = if app.is_active() {
        "job-card active-application"
    } else {
        "job-card"
    };

    html! {
        div class=(class) {
            h3 { (app.company_name) }
            p { strong { "Position:" } " " (app.position) }
            p { strong { "Status:" } " " (status_badge(&app.status)) }
            div class="card-actions" {
                a href=(format!("/details/{}", app.id)) class="card-button view-button" { "View Details" }
                a href=(format!("/update/{}", app.id)) class="card-button edit-button" { "Edit" }
            }
        }
    }
}
