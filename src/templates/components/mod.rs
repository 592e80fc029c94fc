use crate::domain::format::{status_badge_class, status_label};
use crate::flash::{Flash, ShownFlash};
use maud::{html, Markup};

pub mod application_form;
pub mod card;
pub mod error;

pub use application_form::application_form;
pub use card::application_card;
pub use error::html_error_response;

pub fn status_badge(status: &str) -> Markup {
    let class = format!("status-badge {}", status_badge_class(status));
    html! {
        span class=(class.trim_end()) { (status_label(status)) }
    }
}

/// Alert that removes itself when the flash's lifetime runs out.
pub fn flash_alert(shown: &ShownFlash) -> Markup {
    let class = match shown.flash {
        Flash::Message(_) => "alert alert-success",
        Flash::Error(_) => "alert alert-error",
    };
    html! {
        div class=(class) role="status" data-dismiss-after=(shown.remaining.as_millis()) {
            (shown.flash.text())
        }
    }
}

/// Container whose body is replaced by `src` as soon as it is on screen.
pub fn deferred(id: &str, src: &str, load: bool, body: Markup) -> Markup {
    html! {
        @if load {
            div id=(id) hx-get=(src) hx-trigger="load" hx-swap="innerHTML" { (body) }
        } @else {
            div id=(id) { (body) }
        }
    }
}
